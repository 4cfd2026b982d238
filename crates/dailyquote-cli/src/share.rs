//! Share targets available from the terminal.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use dailyquote_core::share::{ShareRequest, ShareTarget};
use dailyquote_core::util::compact_text;
use dailyquote_core::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::render::render_share_card;

/// Prints a framed share card to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    async fn is_available(&self) -> bool {
        true
    }

    async fn share(&self, request: &ShareRequest) -> dailyquote_core::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", render_share_card(request))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Pipes the share message into an external program (`wl-copy`, `pbcopy`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandShare {
    command: String,
}

impl CommandShare {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn program_and_args(&self) -> Option<(&str, Vec<&str>)> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next()?;
        Some((program, parts.collect()))
    }
}

impl ShareTarget for CommandShare {
    async fn is_available(&self) -> bool {
        self.program_and_args()
            .is_some_and(|(program, _)| find_program(program).is_some())
    }

    async fn share(&self, request: &ShareRequest) -> dailyquote_core::Result<()> {
        let Some((program, args)) = self.program_and_args() else {
            return Err(Error::Share("empty share command".to_string()));
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(request.message.as_bytes()).await?;
        }

        let output = child.wait_with_output().await?;
        if output.status.success() {
            tracing::debug!(command = %self.command, "Quote handed to share command");
            Ok(())
        } else {
            let stderr = compact_text(&String::from_utf8_lossy(&output.stderr));
            Err(Error::Share(format!(
                "`{}` exited with status {}: {stderr}",
                self.command, output.status
            )))
        }
    }
}

/// Share target chosen from configuration
#[derive(Debug, Clone)]
pub enum ShareBackend {
    Stdout(StdoutShare),
    Command(CommandShare),
}

impl ShareBackend {
    /// Command target when one is configured, stdout otherwise
    pub fn from_command(command: Option<String>) -> Self {
        command.map_or(Self::Stdout(StdoutShare), |command| {
            Self::Command(CommandShare::new(command))
        })
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_string(),
            Self::Command(target) => target.command().to_string(),
        }
    }
}

impl ShareTarget for ShareBackend {
    async fn is_available(&self) -> bool {
        match self {
            Self::Stdout(target) => target.is_available().await,
            Self::Command(target) => target.is_available().await,
        }
    }

    async fn share(&self, request: &ShareRequest) -> dailyquote_core::Result<()> {
        match self {
            Self::Stdout(target) => target.share(request).await,
            Self::Command(target) => target.share(request).await,
        }
    }
}

/// Resolve a program name against `PATH`; explicit paths are checked as is
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        let full = dir.join(program);
        if full.is_file() {
            return Some(full);
        }
        if cfg!(windows) {
            let exe = full.with_extension("exe");
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}
