/*!
 * Selection pipeline
 *
 * Turns a selection of paths into one clipboard payload. Every entry is
 * stat'ed, classified and (when eligible) read on the rayon pool; results
 * are collected in selection order, formatted, joined and published, and
 * the user is told what was included and what was skipped.
 */

use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::classifier::classify;
use crate::clipboard::ClipboardWriter;
use crate::error::Result;
use crate::filesystem::{FileSystem, LocalFileSystem};
use crate::formatter::{format_file_block, format_selection_block};
use crate::fragment::Fragment;
use crate::notifier::{prefixed, Notifier, Severity};
use crate::paths::PathResolver;
use crate::reader::read_content;
use crate::report::{
    copied_message, no_valid_files_message, nothing_selected_message, skipped_message,
    IncludedFile, RunSummary, SkipSummary,
};
use crate::types::{Decision, FileStatus, ProcessedFile, SelectionItem};
use crate::utils::{format_file_size, FILE_SEPARATOR, MAX_FILE_SIZE_BYTES};

/// Terminal state of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The selection was empty (or the selected text was blank)
    NothingSelected,
    /// Nothing could be included; the clipboard was not touched
    NoValidFiles(SkipSummary),
    /// The payload was published
    Completed(RunSummary),
}

/// Processes selections against a filesystem and a set of project roots
#[derive(Clone)]
pub struct SelectionPipeline<F = LocalFileSystem> {
    fs: F,
    resolver: PathResolver,
    progress: Arc<ProgressBar>,
}

impl<F: FileSystem> SelectionPipeline<F> {
    /// Create a pipeline with a hidden progress bar
    pub fn new(fs: F, resolver: PathResolver) -> Self {
        Self {
            fs,
            resolver,
            progress: Arc::new(ProgressBar::hidden()),
        }
    }

    /// Report per-item progress on `progress`
    pub fn with_progress(mut self, progress: Arc<ProgressBar>) -> Self {
        self.progress = progress;
        self
    }

    /// Stat, classify and read a single entry
    ///
    /// Never fails: stat and read errors become `SkippedReadError`.
    pub fn process_item(&self, mut item: SelectionItem) -> ProcessedFile {
        let relative_path = self.resolver.to_relative_path(&item.locator);

        let status = match self.fs.stat(&item.locator) {
            Err(e) => {
                warn!(path = %item.locator.display(), error = %e, "failed to stat selected entry");
                FileStatus::SkippedReadError
            }
            Ok(stat) => {
                item.kind = Some(stat.kind);
                let decision = classify(&item.locator, &stat);
                trace!(path = %relative_path, kind = ?item.kind, ?decision, "classified");

                match decision {
                    Decision::Directory => FileStatus::SkippedDirectory,
                    Decision::Binary => {
                        debug!(path = %relative_path, "skipping binary file");
                        FileStatus::SkippedBinary
                    }
                    Decision::Large => {
                        debug!(
                            path = %relative_path,
                            size = %format_file_size(stat.size),
                            "skipping large file"
                        );
                        FileStatus::SkippedLarge
                    }
                    Decision::Eligible => match read_content(&self.fs, &item.locator) {
                        Ok(content) => FileStatus::Ok(content),
                        Err(e) => {
                            warn!(
                                path = %item.locator.display(),
                                error = %e,
                                "failed to read file"
                            );
                            FileStatus::SkippedReadError
                        }
                    },
                }
            }
        };

        self.progress.inc(1);

        ProcessedFile {
            locator: item.locator,
            relative_path,
            status,
        }
    }

    /// Process every entry concurrently; results keep the selection order
    pub fn process_all(&self, selection: &[PathBuf]) -> Vec<ProcessedFile> {
        self.progress.set_length(selection.len() as u64);

        selection
            .par_iter()
            .map(|locator| self.process_item(SelectionItem::from(locator.clone())))
            .collect()
    }

    /// Copy the selected files with their paths to the clipboard
    pub fn run(
        &self,
        selection: &[PathBuf],
        clipboard: &dyn ClipboardWriter,
        notifier: &dyn Notifier,
    ) -> Result<RunOutcome> {
        if selection.is_empty() {
            notifier.notify(Severity::Info, &prefixed(&nothing_selected_message()));
            return Ok(RunOutcome::NothingSelected);
        }

        let results = self.process_all(selection);
        self.progress.finish_and_clear();

        let (successful, others): (Vec<&ProcessedFile>, Vec<&ProcessedFile>) =
            results.iter().partition(|file| file.is_ok());
        let skipped = SkipSummary::from_processed(others);

        if successful.is_empty() {
            notifier.notify(
                Severity::Warning,
                &prefixed(&no_valid_files_message(&skipped)),
            );
            return Ok(RunOutcome::NoValidFiles(skipped));
        }

        let summary = build_summary(&successful, skipped);
        publish(clipboard, notifier, &summary.payload)?;
        info!(
            files = summary.included_count,
            skipped = summary.skipped.total,
            chars = summary.payload_chars,
            "copied selection"
        );

        notifier.notify(Severity::Success, &prefixed(&copied_message(&summary)));
        if !summary.skipped.is_empty() {
            notifier.notify(
                Severity::Warning,
                &prefixed(&skipped_message(&summary.skipped)),
            );
        }

        Ok(RunOutcome::Completed(summary))
    }

    /// Copy a range of lines from one file to the clipboard
    pub fn run_fragment(
        &self,
        fragment: &Fragment,
        clipboard: &dyn ClipboardWriter,
        notifier: &dyn Notifier,
    ) -> Result<RunOutcome> {
        self.progress.set_length(1);
        let source = self.process_item(SelectionItem::from(fragment.locator.clone()));
        self.progress.finish_and_clear();

        let content = match &source.status {
            FileStatus::Ok(content) => content,
            status => {
                let notice = fragment_skip_notice(&source.relative_path, status);
                notifier.notify(Severity::Warning, &prefixed(&notice));
                let skipped = SkipSummary::from_processed([&source]);
                return Ok(RunOutcome::NoValidFiles(skipped));
            }
        };
        let relative_path = &source.relative_path;

        let selected = fragment.lines.select(content);
        let block = selected.as_ref().map(|(text, last)| {
            let label = format!("{}:{}-{}", relative_path, fragment.lines.start, last);
            (format_selection_block(&label, text), label, text)
        });

        let Some((block, label, text)) = block.filter(|(block, _, _)| !block.is_empty()) else {
            notifier.notify(
                Severity::Info,
                &prefixed("Selection is empty, nothing copied."),
            );
            return Ok(RunOutcome::NothingSelected);
        };

        publish(clipboard, notifier, &block)?;
        info!(label = %label, chars = block.chars().count(), "copied fragment");

        notifier.notify(
            Severity::Success,
            &prefixed(&format!("Copied selection from {} to clipboard.", label)),
        );

        Ok(RunOutcome::Completed(RunSummary {
            included_count: 1,
            empty_count: 0,
            skipped: SkipSummary::default(),
            included: vec![IncludedFile {
                relative_path: label,
                lines: text.lines().count(),
                chars: text.chars().count(),
            }],
            payload_chars: block.chars().count(),
            payload: block,
        }))
    }
}

/// Format the successful files and join them in selection order
///
/// Files whose content is blank are still counted as included but
/// contribute no block.
pub fn build_summary(successful: &[&ProcessedFile], skipped: SkipSummary) -> RunSummary {
    let mut blocks = Vec::with_capacity(successful.len());
    let mut included = Vec::with_capacity(successful.len());
    let mut empty_count = 0;

    for file in successful {
        let content = file.content().unwrap_or_default();

        let block = format_file_block(&file.relative_path, content);
        if block.is_empty() {
            empty_count += 1;
        } else {
            blocks.push(block);
        }

        included.push(IncludedFile {
            relative_path: file.relative_path.clone(),
            lines: content.lines().count(),
            chars: content.chars().count(),
        });
    }

    let payload = blocks.join(FILE_SEPARATOR);

    RunSummary {
        included_count: successful.len(),
        empty_count,
        skipped,
        included,
        payload_chars: payload.chars().count(),
        payload,
    }
}

/// Warning shown when the fragment's file cannot be used
fn fragment_skip_notice(path: &str, status: &FileStatus) -> String {
    match status {
        FileStatus::SkippedDirectory => format!("{} is a folder, select a file instead.", path),
        FileStatus::SkippedBinary => format!("Skipped {}: binary file.", path),
        FileStatus::SkippedLarge => {
            let limit = format_file_size(MAX_FILE_SIZE_BYTES);
            format!("Skipped {}: larger than {}.", path, limit)
        }
        _ => format!("Could not read {}.", path),
    }
}

/// Write the payload, telling the user when the clipboard is unavailable
fn publish(clipboard: &dyn ClipboardWriter, notifier: &dyn Notifier, payload: &str) -> Result<()> {
    if let Err(e) = clipboard.write_text(payload) {
        warn!(error = %e, "failed to write clipboard");
        notifier.notify(
            Severity::Warning,
            &prefixed(&format!("Failed to copy to clipboard: {}", e)),
        );
        return Err(e.into());
    }
    Ok(())
}
