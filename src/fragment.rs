/*!
 * Line-range selections within a single file
 */

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ContextCopyError, Result};

/// Inclusive, 1-based line range; an open end runs to the end of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First line
    pub start: usize,
    /// Last line, if bounded
    pub end: Option<usize>,
}

impl LineRange {
    /// Create a validated range
    pub fn new(start: usize, end: Option<usize>) -> Result<Self> {
        crate::ensure!(start >= 1, InvalidArgument, "line numbers start at 1");
        if let Some(end) = end {
            crate::ensure!(
                end >= start,
                InvalidArgument,
                "line range end {} is before start {}",
                end,
                start
            );
        }
        Ok(Self { start, end })
    }

    /// Extract the selected lines from `content`
    ///
    /// Returns the text and the last line actually selected, which is the
    /// range end clamped to the number of lines. `None` when the range
    /// starts past the end of the content.
    pub fn select(&self, content: &str) -> Option<(String, usize)> {
        let total = content.lines().count();
        if self.start > total {
            return None;
        }

        let last = self.end.map_or(total, |end| end.min(total));
        let text = content
            .lines()
            .skip(self.start - 1)
            .take(last - self.start + 1)
            .collect::<Vec<_>>()
            .join("\n");

        Some((text, last))
    }
}

impl FromStr for LineRange {
    type Err = ContextCopyError;

    /// Parse `START`, `START:` or `START:END`
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| -> Result<usize> {
            part.trim()
                .parse::<usize>()
                .map_err(|_| crate::error!(InvalidArgument, "invalid line number: '{}'", part))
        };

        match s.split_once(':') {
            None => {
                let line = parse(s)?;
                Self::new(line, Some(line))
            }
            Some((start, "")) => Self::new(parse(start)?, None),
            Some((start, end)) => Self::new(parse(start)?, Some(parse(end)?)),
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}:{}", self.start, end),
            None => write!(f, "{}:", self.start),
        }
    }
}

/// A code fragment: one file and the lines selected in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Absolute location of the file
    pub locator: PathBuf,
    /// Selected lines
    pub lines: LineRange,
}
