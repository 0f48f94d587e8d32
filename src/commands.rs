/*!
 * Command handlers and the registry that dispatches to them
 *
 * A host registers handlers under a command id and invokes them by name.
 * The pipeline itself knows nothing about the registry.
 */

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::clipboard::ClipboardWriter;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::fragment::Fragment;
use crate::notifier::Notifier;
use crate::pipeline::{RunOutcome, SelectionPipeline};

/// Command id for copying the selected files
pub const COPY_SELECTION_COMMAND: &str = "contextCopy.copySelectionWithContextCommand";

/// Command id for copying a line range of one file
pub const COPY_FRAGMENT_COMMAND: &str = "contextCopy.copyFragmentWithContextCommand";

/// Input handed to a command by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Ordered list of selected paths (may be empty)
    Selection(Vec<PathBuf>),
    /// A code fragment
    Fragment(Fragment),
}

/// Collaborators a command publishes to
pub struct CommandContext<'a> {
    /// Where the payload goes
    pub clipboard: &'a dyn ClipboardWriter,
    /// Where notices go
    pub notifier: &'a dyn Notifier,
}

/// A command the host can invoke by name
pub trait CommandHandler {
    /// Run the command to completion
    fn execute(&self, invocation: Invocation, ctx: &CommandContext<'_>) -> Result<RunOutcome>;
}

/// Copies every selected file, wrapped in a fenced block, to the clipboard
pub struct CopySelectionCommand<F> {
    pipeline: SelectionPipeline<F>,
}

impl<F: FileSystem> CopySelectionCommand<F> {
    /// Create the command around a pipeline
    pub fn new(pipeline: SelectionPipeline<F>) -> Self {
        Self { pipeline }
    }
}

impl<F: FileSystem> CommandHandler for CopySelectionCommand<F> {
    fn execute(&self, invocation: Invocation, ctx: &CommandContext<'_>) -> Result<RunOutcome> {
        match invocation {
            Invocation::Selection(paths) => self.pipeline.run(&paths, ctx.clipboard, ctx.notifier),
            Invocation::Fragment(_) => crate::bail!(
                InvalidArgument,
                "{} expects a file selection, not a fragment",
                COPY_SELECTION_COMMAND
            ),
        }
    }
}

/// Copies a range of lines from one file
pub struct CopyFragmentCommand<F> {
    pipeline: SelectionPipeline<F>,
}

impl<F: FileSystem> CopyFragmentCommand<F> {
    /// Create the command around a pipeline
    pub fn new(pipeline: SelectionPipeline<F>) -> Self {
        Self { pipeline }
    }
}

impl<F: FileSystem> CommandHandler for CopyFragmentCommand<F> {
    fn execute(&self, invocation: Invocation, ctx: &CommandContext<'_>) -> Result<RunOutcome> {
        match invocation {
            Invocation::Fragment(fragment) => {
                self.pipeline.run_fragment(&fragment, ctx.clipboard, ctx.notifier)
            }
            Invocation::Selection(_) => crate::bail!(
                InvalidArgument,
                "{} expects a fragment, not a file selection",
                COPY_FRAGMENT_COMMAND
            ),
        }
    }
}

/// Name-keyed set of command handlers
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        let name = name.into();
        debug!(command = %name, "registered command");
        self.handlers.insert(name, handler);
    }

    /// Whether a handler is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Invoke the handler registered under `name`
    pub fn dispatch(
        &self,
        name: &str,
        invocation: Invocation,
        ctx: &CommandContext<'_>,
    ) -> Result<RunOutcome> {
        let Some(handler) = self.handlers.get(name) else {
            crate::bail!(InvalidArgument, "unknown command: {}", name);
        };

        debug!(command = %name, "dispatching command");
        handler.execute(invocation, ctx)
    }
}
