/*!
 * Run summaries and reporting
 *
 * Builds the immutable summary of one invocation, the notice texts shown
 * to the user, and an optional detailed report rendered either as console
 * tables (tabled) or as JSON.
 */

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::types::{ProcessedFile, SkipReason};
use crate::utils::MAX_SKIPPED_FILES_TO_LIST;

/// A file that made it into the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludedFile {
    /// Display path
    pub relative_path: String,
    /// Number of lines in the content
    pub lines: usize,
    /// Number of characters in the content
    pub chars: usize,
}

/// What was left out of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkipSummary {
    /// Number of skipped files (directories excluded)
    pub total: usize,
    /// Count per reason; reasons with no files are absent
    pub by_reason: BTreeMap<SkipReason, usize>,
    /// First skipped paths, in selection order
    pub examples: Vec<String>,
    /// Whether more files were skipped than listed
    pub truncated: bool,
}

impl SkipSummary {
    /// Summarize processed files; ok files and directories are ignored
    pub fn from_processed<'a, I>(files: I) -> Self
    where
        I: IntoIterator<Item = &'a ProcessedFile>,
    {
        let mut summary = Self::default();

        for file in files {
            let Some(reason) = file.status.skip_reason() else {
                continue;
            };

            summary.total += 1;
            *summary.by_reason.entry(reason).or_insert(0) += 1;
            if summary.examples.len() < MAX_SKIPPED_FILES_TO_LIST {
                summary.examples.push(file.relative_path.clone());
            }
        }

        summary.truncated = summary.total > summary.examples.len();
        summary
    }

    /// Number of files skipped for `reason`
    pub fn count(&self, reason: SkipReason) -> usize {
        self.by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Whether nothing was skipped
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Everything known about a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Files read successfully, empty ones included
    pub included_count: usize,
    /// Included files whose content produced no block
    pub empty_count: usize,
    /// Files left out
    pub skipped: SkipSummary,
    /// Per-file details of included files, in selection order
    pub included: Vec<IncludedFile>,
    /// Text written to the clipboard
    #[serde(skip)]
    pub payload: String,
    /// Length of the payload in characters
    pub payload_chars: usize,
}

impl RunSummary {
    /// Rough token estimate (four characters per token)
    pub fn estimated_tokens(&self) -> usize {
        self.payload_chars / 4
    }
}

//--------------------------------------------------------------------
// Notice texts
//--------------------------------------------------------------------

/// Notice for an empty selection
pub fn nothing_selected_message() -> String {
    "No files or folders selected.".to_string()
}

/// Warning when no file could be included
pub fn no_valid_files_message(skipped: &SkipSummary) -> String {
    let mut message = "No valid text files found in selection to copy.".to_string();
    if !skipped.is_empty() {
        message.push_str(&format!(
            " Skipped {} file(s) due to size, type, or errors.",
            skipped.total
        ));
    }
    message
}

/// Success notice after the payload was published
pub fn copied_message(summary: &RunSummary) -> String {
    let mut message = format!(
        "Copied content of {} file(s) to clipboard.",
        summary.included_count
    );
    if summary.empty_count > 0 {
        message.push_str(&format!(" ({} empty)", summary.empty_count));
    }
    message
}

/// Warning listing what was skipped, e.g.
/// `Skipped 2 file(s) (1 large, 1 binary). Examples: a.log, b.png`
pub fn skipped_message(skipped: &SkipSummary) -> String {
    let reasons = skipped
        .by_reason
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(reason, count)| format!("{} {}", count, reason))
        .collect::<Vec<_>>()
        .join(", ");

    let ellipsis = if skipped.truncated { "..." } else { "" };

    format!(
        "Skipped {} file(s) ({}). Examples: {}{}",
        skipped.total,
        reasons,
        skipped.examples.join(", "),
        ellipsis
    )
}

//--------------------------------------------------------------------
// Detailed report
//--------------------------------------------------------------------

/// Format of the detailed report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Console tables
    Console,
    /// JSON document
    Json,
}

/// Report generator for run summaries
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for a completed run
    pub fn generate_report(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            ReportFormat::Console => Ok(self.generate_console_report(summary)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        }
    }

    fn create_files_table(&self, summary: &RunSummary) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let rows: Vec<FileRow> = summary
            .included
            .iter()
            .map(|file| FileRow {
                path: file.relative_path.clone(),
                lines: self.format_number(file.lines),
                tokens: self.format_number(file.chars / 4),
            })
            .collect();

        styled(Table::new(rows))
    }

    fn create_summary_table(&self, summary: &RunSummary) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📄 Files Copied".to_string(),
                value: self.format_number(summary.included_count),
            },
            SummaryRow {
                key: "📦 LLM Tokens".to_string(),
                value: format!(
                    "{} tokens (estimated)",
                    self.format_number(summary.estimated_tokens())
                ),
            },
        ];

        if summary.empty_count > 0 {
            rows.push(SummaryRow {
                key: "🕳️ Empty Files".to_string(),
                value: self.format_number(summary.empty_count),
            });
        }

        for (reason, count) in &summary.skipped.by_reason {
            rows.push(SummaryRow {
                key: format!("⏭️ Skipped ({})", reason),
                value: self.format_number(*count),
            });
        }

        styled(Table::new(rows))
    }

    fn generate_console_report(&self, summary: &RunSummary) -> String {
        format!(
            "{}\n{}\n\n{}\n{}",
            "📋  COPIED FILES",
            self.create_files_table(summary),
            "✅  COPY COMPLETE",
            self.create_summary_table(summary)
        )
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileStatus;
    use std::path::PathBuf;

    fn processed(path: &str, status: FileStatus) -> ProcessedFile {
        ProcessedFile {
            locator: PathBuf::from("/p").join(path),
            relative_path: path.to_string(),
            status,
        }
    }

    #[test]
    fn test_skip_summary_ignores_ok_and_directories() {
        let files = vec![
            processed("a.txt", FileStatus::Ok("x".to_string())),
            processed("dir", FileStatus::SkippedDirectory),
            processed("b.png", FileStatus::SkippedBinary),
        ];

        let summary = SkipSummary::from_processed(&files);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.count(SkipReason::Binary), 1);
        assert_eq!(summary.count(SkipReason::Large), 0);
        assert_eq!(summary.examples, vec!["b.png"]);
        assert!(!summary.truncated);
    }

    #[test]
    fn test_skipped_message_caps_examples() {
        let mut files: Vec<ProcessedFile> = (0..6)
            .map(|i| processed(&format!("img{}.png", i), FileStatus::SkippedBinary))
            .collect();
        files.push(processed("huge.log", FileStatus::SkippedLarge));
        files.push(processed("gone.txt", FileStatus::SkippedReadError));

        let summary = SkipSummary::from_processed(&files);
        assert_eq!(summary.examples.len(), MAX_SKIPPED_FILES_TO_LIST);
        assert!(summary.truncated);
        assert_eq!(
            skipped_message(&summary),
            "Skipped 8 file(s) (1 large, 6 binary, 1 unreadable/error). \
             Examples: img0.png, img1.png, img2.png, img3.png, img4.png..."
        );
    }

    #[test]
    fn test_no_valid_files_message() {
        assert_eq!(
            no_valid_files_message(&SkipSummary::default()),
            "No valid text files found in selection to copy."
        );

        let files = vec![processed("big.bin", FileStatus::SkippedLarge)];
        assert_eq!(
            no_valid_files_message(&SkipSummary::from_processed(&files)),
            "No valid text files found in selection to copy. \
             Skipped 1 file(s) due to size, type, or errors."
        );
    }

    fn sample_summary() -> RunSummary {
        RunSummary {
            included_count: 2,
            empty_count: 1,
            skipped: SkipSummary::default(),
            included: vec![
                IncludedFile {
                    relative_path: "src/lib.rs".to_string(),
                    lines: 10,
                    chars: 400,
                },
                IncludedFile {
                    relative_path: "empty.txt".to_string(),
                    lines: 0,
                    chars: 0,
                },
            ],
            payload: "```[src/lib.rs]\n...\n```".to_string(),
            payload_chars: 400,
        }
    }

    #[test]
    fn test_copied_message_mentions_empty_files() {
        assert_eq!(
            copied_message(&sample_summary()),
            "Copied content of 2 file(s) to clipboard. (1 empty)"
        );
    }

    #[test]
    fn test_console_report() {
        let report = Reporter::new(ReportFormat::Console)
            .generate_report(&sample_summary())
            .unwrap();
        assert!(report.contains("COPIED FILES"));
        assert!(report.contains("src/lib.rs"));
        assert!(report.contains("100 tokens (estimated)"));
    }

    #[test]
    fn test_json_report_omits_payload() {
        let report = Reporter::new(ReportFormat::Json)
            .generate_report(&sample_summary())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["included_count"], 2);
        assert_eq!(value["included"][0]["relative_path"], "src/lib.rs");
        assert!(value.get("payload").is_none());
    }
}
