/*!
 * Filesystem access used by the selection pipeline
 */

use std::fs;
use std::io;
use std::path::Path;

use crate::types::FileStat;

/// Read-only view of the filesystem
///
/// Both operations may fail; the pipeline converts failures into skip
/// statuses instead of propagating them.
pub trait FileSystem: Send + Sync {
    /// Fetch the kind and size of an entry
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Read the full contents of a file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;

        if metadata.is_dir() {
            Ok(FileStat::directory())
        } else if metadata.is_file() {
            Ok(FileStat::file(metadata.len()))
        } else {
            // FIFOs, sockets and devices have no meaningful size
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ))
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;
    use tempfile::tempdir;

    #[test]
    fn test_local_stat() -> io::Result<()> {
        let temp_dir = tempdir()?;
        let file = temp_dir.path().join("hello.txt");
        fs::write(&file, "hello")?;

        let local = LocalFileSystem;
        assert_eq!(local.stat(&file)?, FileStat::file(5));
        assert_eq!(local.stat(temp_dir.path())?.kind, EntryKind::Directory);
        assert!(local.stat(&temp_dir.path().join("missing.txt")).is_err());

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_special_files_cannot_be_stated() {
        let err = LocalFileSystem.stat(Path::new("/dev/null")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
