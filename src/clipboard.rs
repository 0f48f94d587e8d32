/*!
 * Clipboard writers
 *
 * The system clipboard is reached through whatever command-line helper the
 * platform offers (tmux, wl-copy, xsel, xclip, pbcopy, clip.exe,
 * termux-clipboard-set). Providers are tried in order of preference until
 * one succeeds.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, warn};

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Destination for the final payload
///
/// Writing replaces whatever the destination held before.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// tmux paste buffer (forwarded to the system clipboard with `-w`)
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (native or via WSL)
    Windows,
    /// Termux clipboard
    Termux,
}

impl ClipboardProvider {
    /// Command and arguments that read the text from stdin
    fn command(self) -> (&'static str, &'static [&'static str]) {
        const NO_ARGS: &[&str] = &[];

        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"][..]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"][..]),
            Self::Xsel => ("xsel", &["-b", "-i"][..]),
            Self::Wayland => ("wl-copy", NO_ARGS),
            Self::MacOS => ("pbcopy", NO_ARGS),
            Self::Windows => ("clip.exe", NO_ARGS),
            Self::Termux => ("termux-clipboard-set", NO_ARGS),
        }
    }

    /// Copy `text` using this provider
    pub fn copy(self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        execute_clipboard_command(cmd, args, text)
    }

    /// Providers usable on this system, most preferred first
    pub fn detect() -> Vec<Self> {
        let mut providers = Vec::with_capacity(3);

        if command_exists("tmux") && is_tmux_running() {
            providers.push(Self::Tmux);
        }

        match get_platform() {
            "macos" => {
                if command_exists("pbcopy") {
                    providers.push(Self::MacOS);
                }
            }
            "windows" | "wsl" => {
                if command_exists("clip.exe") {
                    providers.push(Self::Windows);
                }
            }
            "linux" => {
                if env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy") {
                    providers.push(Self::Wayland);
                }
                if command_exists("xsel") {
                    providers.push(Self::Xsel);
                }
                if command_exists("xclip") {
                    providers.push(Self::Xclip);
                }
            }
            "android" => {
                if command_exists("termux-clipboard-set") {
                    providers.push(Self::Termux);
                }
            }
            _ => {}
        }

        providers
    }
}

/// The system clipboard
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    providers: Vec<ClipboardProvider>,
}

impl SystemClipboard {
    /// Use the providers detected on this system
    pub fn detect() -> Self {
        Self::with_providers(ClipboardProvider::detect())
    }

    /// Use an explicit provider list, tried in order
    pub fn with_providers(providers: Vec<ClipboardProvider>) -> Self {
        Self { providers }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut last_error = None;

        for provider in &self.providers {
            match provider.copy(text) {
                Ok(()) => {
                    debug!(?provider, bytes = text.len(), "copied to clipboard");
                    return Ok(());
                }
                Err(e) => {
                    warn!(?provider, error = %e, "clipboard provider failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ClipboardError::NoClipboardFound))
    }
}

/// Writes the payload to stdout instead of the clipboard
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl ClipboardWriter for StdoutWriter {
    fn write_text(&self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            handle.write_all(b"\n")?;
        }
        handle.flush()?;
        Ok(())
    }
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Some(paths) = env::var_os("PATH") {
        if env::split_paths(&paths).any(|dir| Path::new(&dir).join(command).is_file()) {
            return true;
        }
    }

    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Spawn `cmd`, feed `text` on stdin and wait for it to exit
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;

        stdin
            .write_all(text.as_bytes())
            .map_err(|e| {
                ClipboardError::CommandFailed(format!("Failed to write to {}: {}", cmd, e))
            })?;
    }
    // Close stdin so the helper sees EOF
    drop(child.stdin.take());

    let status = child
        .wait()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to wait for {}: {}", cmd, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "android") {
            "android"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else {
            "unknown"
        }
    })
}

/// Check if tmux is running and available for clipboard operations
fn is_tmux_running() -> bool {
    if env::var("TMUX").is_ok() {
        return true;
    }

    Command::new("tmux")
        .args(["list-buffers"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
