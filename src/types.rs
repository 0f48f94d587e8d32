/*!
 * Core types and data structures for contextcopy
 */

use std::path::PathBuf;

use serde::Serialize;
use strum::{Display, EnumIter};

/// Kind of a selected filesystem entry, resolved at processing time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory)
    File,
    /// Directory; never recursed into
    Directory,
}

/// Metadata gathered by `stat` before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Entry kind
    pub kind: EntryKind,
    /// Size in bytes
    pub size: u64,
}

impl FileStat {
    /// Metadata for a regular file of `size` bytes
    pub fn file(size: u64) -> Self {
        Self {
            kind: EntryKind::File,
            size,
        }
    }

    /// Metadata for a directory
    pub fn directory() -> Self {
        Self {
            kind: EntryKind::Directory,
            size: 0,
        }
    }
}

/// One selected entry, created per invocation from raw input
#[derive(Debug, Clone)]
pub struct SelectionItem {
    /// Absolute location of the entry
    pub locator: PathBuf,
    /// Resolved kind, known once the entry has been stat'ed
    pub kind: Option<EntryKind>,
}

impl From<PathBuf> for SelectionItem {
    fn from(locator: PathBuf) -> Self {
        Self {
            locator,
            kind: None,
        }
    }
}

/// Outcome of the classifier for a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Entry is a directory
    Directory,
    /// Extension marks the file as binary
    Binary,
    /// File exceeds the size threshold
    Large,
    /// Safe to read and include
    Eligible,
}

/// Why a file was left out of the payload
///
/// Declaration order is the order reasons appear in the skip summary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Larger than the size threshold
    #[strum(serialize = "large")]
    Large,
    /// Known binary extension
    #[strum(serialize = "binary")]
    Binary,
    /// Stat or read failed
    #[strum(serialize = "unreadable/error")]
    ReadError,
}

/// Processing status of a selected entry
///
/// Content is carried by the `Ok` variant only, so a file has content if
/// and only if it was read successfully. Empty content is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Read successfully
    Ok(String),
    /// Skipped because of a binary extension
    SkippedBinary,
    /// Skipped because of its size
    SkippedLarge,
    /// Stat or read failed
    SkippedReadError,
    /// Directories are dropped without being reported
    SkippedDirectory,
}

impl FileStatus {
    /// Reportable skip reason, if any
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::SkippedBinary => Some(SkipReason::Binary),
            Self::SkippedLarge => Some(SkipReason::Large),
            Self::SkippedReadError => Some(SkipReason::ReadError),
            Self::Ok(_) | Self::SkippedDirectory => None,
        }
    }
}

/// Result of processing one selected entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    /// Absolute location of the entry
    pub locator: PathBuf,
    /// Display path relative to the project root
    pub relative_path: String,
    /// Processing status (and content, when read)
    pub status: FileStatus,
}

impl ProcessedFile {
    /// File content, present only when the status is ok
    pub fn content(&self) -> Option<&str> {
        match &self.status {
            FileStatus::Ok(content) => Some(content),
            _ => None,
        }
    }

    /// Whether the file was read successfully
    pub fn is_ok(&self) -> bool {
        matches!(self.status, FileStatus::Ok(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_skip_reason_labels_in_summary_order() {
        let labels: Vec<String> = SkipReason::iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["large", "binary", "unreadable/error"]);
    }

    #[test]
    fn test_content_present_only_when_ok() {
        let ok = ProcessedFile {
            locator: PathBuf::from("/p/empty.txt"),
            relative_path: "empty.txt".to_string(),
            status: FileStatus::Ok(String::new()),
        };
        assert_eq!(ok.content(), Some(""));
        assert!(ok.is_ok());

        let skipped = ProcessedFile {
            status: FileStatus::SkippedLarge,
            ..ok
        };
        assert_eq!(skipped.content(), None);
        assert_eq!(skipped.status.skip_reason(), Some(SkipReason::Large));
        assert_eq!(FileStatus::SkippedDirectory.skip_reason(), None);
    }
}
