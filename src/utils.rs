/*!
 * Static limits and helpers for contextcopy
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Files larger than this many bytes are skipped as too large (5 MiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Separator placed between formatted blocks in the payload
pub const FILE_SEPARATOR: &str = "\n\n";

/// Prefix of every user-facing notice
pub const MESSAGE_PREFIX: &str = "Context Copy: ";

/// Maximum number of skipped paths listed in the skip warning
pub const MAX_SKIPPED_FILES_TO_LIST: usize = 5;

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Extensions (lowercase, without the dot) that are never read as text
pub static BINARY_FILE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Images
        "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "ico", "webp", "psd",
        // Documents
        "pdf",
        // Archives
        "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war",
        // Executables & Libraries
        "exe", "dll", "so", "dylib", "a", "o", "lib",
        // Fonts
        "woff", "woff2", "ttf", "otf", "eot",
        // Media
        "mp3", "wav", "ogg", "flac", "mp4", "mov", "avi", "mkv", "webm",
        // Bytecode
        "class", "pyc", "pyo", "wasm",
        // Databases
        "db", "sqlite", "sqlite3",
        // Temp & editor metadata
        "swp", "swo", "tmp",
        // Installers & disk images
        "msi", "dmg", "deb", "rpm", "pkg", "apk", "iso",
    ]
    .into_iter()
    .collect()
});
