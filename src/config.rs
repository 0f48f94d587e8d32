/*!
 * Configuration handling for contextcopy
 */

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::error::Result;
use crate::fragment::LineRange;
use crate::paths::absolutize;
use crate::report::ReportFormat;

/// Command-line arguments for contextcopy
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "contextcopy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy files with their paths to the clipboard for LLM context",
    long_about = "Wraps each selected file's project-relative path and content in a fenced block, joins the blocks and copies the result to the system clipboard. Directories, binary files and files over 5 MiB are skipped."
)]
pub struct Args {
    /// What to copy
    #[clap(subcommand)]
    pub command: Option<CopyCommand>,

    /// Project root used for relative display paths (repeatable, defaults to the current directory)
    #[clap(long = "root", global = true)]
    pub roots: Vec<String>,

    /// Number of threads to use for processing
    #[clap(long, default_value = "4", global = true)]
    pub threads: usize,

    /// Print the payload to stdout instead of copying it
    #[clap(long, global = true)]
    pub print: bool,

    /// Print a detailed report of a completed copy to stderr
    #[clap(long, value_enum, global = true)]
    pub report: Option<ReportFormat>,

    /// Show a progress bar while files are processed
    #[clap(long, global = true)]
    pub progress: bool,

    /// Only show warnings
    #[clap(long, short, global = true)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Subcommands selecting what to copy
#[derive(Subcommand, Debug, Clone)]
pub enum CopyCommand {
    /// Copy whole files
    Files {
        /// Files to copy; directories are ignored
        paths: Vec<String>,

        /// Also read newline-separated paths from stdin
        #[clap(long)]
        stdin: bool,
    },
    /// Copy a range of lines from one file
    Fragment {
        /// File to copy from
        file: String,

        /// Lines to copy: START, START: or START:END (1-based, inclusive)
        #[clap(long, short)]
        lines: LineRange,
    },
}

/// Where the payload is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// The system clipboard
    Clipboard,
    /// Standard output
    Stdout,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Absolute project roots
    pub roots: Vec<PathBuf>,

    /// Number of threads to use for processing
    pub num_threads: usize,

    /// Payload destination
    pub output: OutputTarget,

    /// Detailed report format, if requested
    pub report: Option<ReportFormat>,

    /// Whether to draw a progress bar
    pub show_progress: bool,

    /// Suppress info and success notices
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Relative roots are resolved against `cwd`, which is also the root
    /// when none is given.
    pub fn from_args(args: &Args, cwd: &Path) -> Self {
        let roots = if args.roots.is_empty() {
            vec![cwd.to_path_buf()]
        } else {
            args.roots
                .iter()
                .map(|root| absolutize(Path::new(root), cwd))
                .collect()
        };

        Self {
            roots,
            num_threads: args.threads,
            output: if args.print {
                OutputTarget::Stdout
            } else {
                OutputTarget::Clipboard
            },
            report: args.report,
            show_progress: args.progress,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.num_threads >= 1,
            Config,
            "thread count must be at least 1"
        );

        for root in &self.roots {
            crate::ensure!(
                root.is_dir(),
                Config,
                "Project root not found: {}",
                root.display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContextCopyError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_files_command() {
        let args = Args::parse_from([
            "contextcopy",
            "--print",
            "files",
            "a.txt",
            "src/b.rs",
            "--root",
            "/work",
        ]);

        match &args.command {
            Some(CopyCommand::Files { paths, stdin }) => {
                assert_eq!(paths, &vec!["a.txt".to_string(), "src/b.rs".to_string()]);
                assert!(!stdin);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let config = Config::from_args(&args, Path::new("/home/me"));
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.roots, vec![PathBuf::from("/work")]);
        assert_eq!(config.num_threads, 4);
    }

    #[test]
    fn test_parse_fragment_command() {
        let args = Args::parse_from(["contextcopy", "fragment", "src/lib.rs", "--lines", "3:7"]);

        match args.command {
            Some(CopyCommand::Fragment { file, lines }) => {
                assert_eq!(file, "src/lib.rs");
                assert_eq!(lines, LineRange::new(3, Some(7)).unwrap());
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let parsed = Args::try_parse_from(["contextcopy", "fragment", "a.rs", "--lines", "9:2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_default_root_is_cwd() {
        let args = Args::parse_from(["contextcopy", "files"]);
        let config = Config::from_args(&args, Path::new("/home/me/project"));
        assert_eq!(config.roots, vec![PathBuf::from("/home/me/project")]);
        assert_eq!(config.output, OutputTarget::Clipboard);
    }

    #[test]
    fn test_validate() -> std::io::Result<()> {
        let temp_dir = tempdir()?;
        let args = Args::parse_from(["contextcopy", "files"]);

        let config = Config::from_args(&args, temp_dir.path());
        assert!(config.validate().is_ok());

        let missing = Config {
            roots: vec![temp_dir.path().join("missing")],
            ..config.clone()
        };
        assert!(matches!(
            missing.validate(),
            Err(ContextCopyError::Config(_))
        ));

        let no_threads = Config {
            num_threads: 0,
            ..config
        };
        assert!(no_threads.validate().is_err());

        Ok(())
    }
}
