//! Global error handling for contextcopy
//!
//! Per-item failures (stat, read) never reach this type: the pipeline turns
//! them into skip statuses. Only invocation-level failures such as a failed
//! clipboard write or a bad argument are represented here.

use std::io;
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for contextcopy operations
#[derive(Error, Debug)]
pub enum ContextCopyError {
    /// Clipboard-related errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for contextcopy operations
pub type Result<T> = std::result::Result<T, ContextCopyError>;

/// Creates a ContextCopyError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ContextCopyError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(
            n > 0,
            InvalidArgument,
            "expected a positive number, got {}",
            n
        );
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(3).unwrap(), 3);

        let err = check_positive(-1).unwrap_err();
        assert!(matches!(err, ContextCopyError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected a positive number, got -1"
        );
    }

    #[test]
    fn test_clipboard_error_conversion() {
        let err: ContextCopyError = ClipboardError::NoClipboardFound.into();
        assert_eq!(
            err.to_string(),
            "Clipboard error: No suitable clipboard mechanism found"
        );
    }
}
