/*!
 * Content reading for eligible files
 */

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::filesystem::FileSystem;

/// Why a file's content could not be read
#[derive(Error, Debug)]
pub enum ReadFailure {
    /// The file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The content is not valid UTF-8
    #[error("File is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Read the full text content of a file
///
/// An empty file yields an empty string. A leading byte order mark is
/// dropped.
pub fn read_content<F: FileSystem + ?Sized>(fs: &F, locator: &Path) -> Result<String, ReadFailure> {
    let bytes = fs.read(locator)?;
    let mut content = String::from_utf8(bytes)?;

    if content.starts_with('\u{feff}') {
        content.replace_range(..'\u{feff}'.len_utf8(), "");
    }

    Ok(content)
}
