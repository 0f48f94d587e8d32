/*!
 * contextcopy - Copy selected files with their paths for LLM context
 *
 * This library turns a selection of files (or a range of lines in one
 * file) into a single text payload of path-labelled fenced blocks and
 * hands it to a clipboard writer, reporting what was skipped and why.
 */

pub mod classifier;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod formatter;
pub mod fragment;
pub mod notifier;
pub mod paths;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use classifier::classify;
pub use clipboard::{ClipboardWriter, StdoutWriter, SystemClipboard};
pub use commands::{CommandContext, CommandHandler, CommandRegistry, Invocation};
pub use config::Config;
pub use error::{ContextCopyError, Result};
pub use filesystem::{FileSystem, LocalFileSystem};
pub use formatter::{format_file_block, format_selection_block};
pub use notifier::{Notifier, Severity};
pub use paths::PathResolver;
pub use pipeline::{RunOutcome, SelectionPipeline};
pub use report::{ReportFormat, Reporter, RunSummary, SkipSummary};
pub use types::{Decision, FileStat, FileStatus, ProcessedFile, SkipReason};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
