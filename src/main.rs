/*!
 * Command-line interface for contextcopy
 */

use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contextcopy::bail;
use contextcopy::clipboard::{ClipboardWriter, StdoutWriter, SystemClipboard};
use contextcopy::commands::{
    CommandContext, CommandRegistry, CopyFragmentCommand, CopySelectionCommand, Invocation,
    COPY_FRAGMENT_COMMAND, COPY_SELECTION_COMMAND,
};
use contextcopy::config::{Args, Config, CopyCommand, OutputTarget};
use contextcopy::error::Result;
use contextcopy::filesystem::LocalFileSystem;
use contextcopy::fragment::Fragment;
use contextcopy::notifier::ConsoleNotifier;
use contextcopy::paths::{absolutize, PathResolver};
use contextcopy::pipeline::{RunOutcome, SelectionPipeline};
use contextcopy::report::Reporter;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} {prefix:.bold.cyan} {wide_bar:.cyan/blue} {pos}/{len} ⏱️  {elapsed_precise}";

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut command = Args::command();
        clap_complete::generate(shell, &mut command, "contextcopy", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so `--print` output stays clean
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "contextcopy=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir()?;

    let config = Config::from_args(&args, &cwd);
    config.validate()?;

    let Some(command) = args.command else {
        bail!(
            InvalidArgument,
            "no command given, try `contextcopy files <PATHS>...` or `contextcopy --help`"
        );
    };

    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        warn!(error = %e, "failed to set thread pool size");
    }

    let progress = Arc::new(create_progress_bar(config.show_progress));
    let pipeline = SelectionPipeline::new(LocalFileSystem, PathResolver::new(config.roots.clone()))
        .with_progress(Arc::clone(&progress));

    let mut registry = CommandRegistry::new();
    registry.register(
        COPY_SELECTION_COMMAND,
        Box::new(CopySelectionCommand::new(pipeline.clone())),
    );
    registry.register(
        COPY_FRAGMENT_COMMAND,
        Box::new(CopyFragmentCommand::new(pipeline)),
    );

    let (name, invocation) = match command {
        CopyCommand::Files { mut paths, stdin } => {
            if stdin {
                paths.extend(read_stdin_paths()?);
            }
            let selection = paths
                .iter()
                .map(|path| absolutize(Path::new(path), &cwd))
                .collect();
            (COPY_SELECTION_COMMAND, Invocation::Selection(selection))
        }
        CopyCommand::Fragment { file, lines } => (
            COPY_FRAGMENT_COMMAND,
            Invocation::Fragment(Fragment {
                locator: absolutize(Path::new(&file), &cwd),
                lines,
            }),
        ),
    };

    let clipboard: Box<dyn ClipboardWriter> = match config.output {
        OutputTarget::Clipboard => Box::new(SystemClipboard::detect()),
        OutputTarget::Stdout => Box::new(StdoutWriter),
    };
    let notifier = ConsoleNotifier {
        quiet: config.quiet,
    };
    let ctx = CommandContext {
        clipboard: clipboard.as_ref(),
        notifier: &notifier,
    };

    let outcome = registry.dispatch(name, invocation, &ctx)?;
    progress.finish_and_clear();

    if let (Some(format), RunOutcome::Completed(summary)) = (config.report, &outcome) {
        let report = Reporter::new(format).generate_report(summary)?;
        eprintln!("\n{}", report);
    }

    Ok(())
}

fn create_progress_bar(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(0);
    match ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
        Ok(style) => progress.set_style(style),
        Err(e) => warn!(error = %e, "invalid progress bar template"),
    }
    progress.set_prefix("📋 Reading");
    progress
}

/// Newline-separated paths from stdin, blank lines skipped
fn read_stdin_paths() -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}
