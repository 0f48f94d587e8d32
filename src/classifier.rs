/*!
 * Classification of selected entries before any content is read
 */

use std::path::Path;

use crate::types::{Decision, EntryKind, FileStat};
use crate::utils::{BINARY_FILE_EXTENSIONS, MAX_FILE_SIZE_BYTES};

/// Decide what to do with an entry, first matching rule wins:
/// directory, binary extension, size over the threshold, eligible.
pub fn classify(locator: &Path, stat: &FileStat) -> Decision {
    if stat.kind == EntryKind::Directory {
        return Decision::Directory;
    }

    if is_binary_extension(locator) {
        return Decision::Binary;
    }

    if stat.size > MAX_FILE_SIZE_BYTES {
        return Decision::Large;
    }

    Decision::Eligible
}

/// Check the extension of the final path segment against the binary set
///
/// `Path::extension` ignores a leading dot, so `.env` or `.DS_Store` have
/// no extension and never match.
pub fn is_binary_extension(locator: &Path) -> bool {
    locator
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| BINARY_FILE_EXTENSIONS.contains(ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_wins() {
        assert_eq!(
            classify(Path::new("/p/assets.png"), &FileStat::directory()),
            Decision::Directory
        );
    }

    #[test]
    fn test_binary_extension_case_insensitive() {
        for name in ["photo.png", "PHOTO.PNG", "archive.Tar", "lib.so", "x.pyc"] {
            assert_eq!(
                classify(Path::new(name), &FileStat::file(10)),
                Decision::Binary,
                "{} should be binary",
                name
            );
        }
    }

    #[test]
    fn test_binary_checked_before_size() {
        let huge = FileStat::file(MAX_FILE_SIZE_BYTES * 2);
        assert_eq!(classify(Path::new("movie.mp4"), &huge), Decision::Binary);
    }

    #[test]
    fn test_size_threshold() {
        let path = Path::new("/p/notes.txt");
        assert_eq!(
            classify(path, &FileStat::file(MAX_FILE_SIZE_BYTES)),
            Decision::Eligible
        );
        assert_eq!(
            classify(path, &FileStat::file(MAX_FILE_SIZE_BYTES + 1)),
            Decision::Large
        );
        // Not in the binary set, so only size matters
        assert_eq!(
            classify(Path::new("big.bin"), &FileStat::file(6 * 1024 * 1024)),
            Decision::Large
        );
    }

    #[test]
    fn test_no_extension_and_dotfiles() {
        for name in [
            "Makefile",
            ".env",
            ".DS_Store",
            "/p/.gitignore",
            "dir.png/README",
        ] {
            assert_eq!(
                classify(Path::new(name), &FileStat::file(10)),
                Decision::Eligible,
                "{} should be eligible",
                name
            );
        }
        assert_eq!(
            classify(
                Path::new(".hidden"),
                &FileStat::file(MAX_FILE_SIZE_BYTES + 1)
            ),
            Decision::Large
        );
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(
            classify(Path::new("backup.tar.gz"), &FileStat::file(1)),
            Decision::Binary
        );
        assert_eq!(
            classify(Path::new("image.png.txt"), &FileStat::file(1)),
            Decision::Eligible
        );
    }
}
