use async_trait::async_trait;
use std::io::Write;
use tokio::process::Command;

use super::error::LaunchError;
use crate::types::{CommandLine, RunResult};
use crate::utils::logging;

/// Starts one simulator run and waits for it to terminate.
#[async_trait]
pub trait Launcher: Send {
    /// Runs `command` for the point `index` to completion.
    ///
    /// A child that starts and exits non-zero is an `Ok` result; only a child
    /// that cannot be started at all is an error.
    async fn launch(&mut self, index: u32, command: &CommandLine) -> Result<RunResult, LaunchError>;
}

/// Runs the simulator as a real child process.
///
/// Standard input, output and error are inherited, so the simulator's output
/// interleaves with the progress lines in real time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&mut self, index: u32, command: &CommandLine) -> Result<RunResult, LaunchError> {
        logging::log("SWEEP", &format!("Launching: {}", command));
        let status = Command::new(command.program())
            .args(command.args())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| LaunchError {
                command: command.to_string(),
                source,
            })?;
        Ok(RunResult::new(index, status.code()))
    }
}

/// Prints each command line instead of running it and reports success.
pub struct DryRunLauncher<W: Write + Send> {
    out: W,
}

impl DryRunLauncher<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl<W: Write + Send> DryRunLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> Launcher for DryRunLauncher<W> {
    async fn launch(&mut self, index: u32, command: &CommandLine) -> Result<RunResult, LaunchError> {
        writeln!(self.out, "{}", command)
            .and_then(|_| self.out.flush())
            .map_err(|source| LaunchError {
                command: command.to_string(),
                source,
            })?;
        Ok(RunResult::new(index, Some(0)))
    }
}

#[async_trait]
impl<L: Launcher + ?Sized> Launcher for Box<L> {
    async fn launch(&mut self, index: u32, command: &CommandLine) -> Result<RunResult, LaunchError> {
        (**self).launch(index, command).await
    }
}
