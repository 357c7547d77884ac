use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::sweep::error::LaunchError;
use crate::sweep::launcher::Launcher;
use crate::types::{CommandLine, RunResult};

/// A `Write` sink whose contents can be read while the sweep is still running.
#[derive(Clone, Default)]
pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One recorded launch: the index, the command and the progress output seen at launch time.
#[derive(Debug, Clone)]
pub struct Launch {
    pub index: u32,
    pub tokens: Vec<String>,
    pub output_at_launch: String,
}

/// Launcher stub that records every call and answers from a script.
pub struct RecordingLauncher {
    pub launches: Vec<Launch>,
    output: SharedBuffer,
    exit_code: i32,
    fail_launch_at: Option<u32>,
}

impl RecordingLauncher {
    pub fn new(output: SharedBuffer) -> Self {
        Self {
            launches: Vec::new(),
            output,
            exit_code: 0,
            fail_launch_at: None,
        }
    }

    pub fn exiting_with(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn failing_launch_at(mut self, index: u32) -> Self {
        self.fail_launch_at = Some(index);
        self
    }

    pub fn indices(&self) -> Vec<u32> {
        self.launches.iter().map(|launch| launch.index).collect()
    }
}

#[async_trait]
impl Launcher for RecordingLauncher {
    async fn launch(&mut self, index: u32, command: &CommandLine) -> Result<RunResult, LaunchError> {
        if self.fail_launch_at == Some(index) {
            return Err(LaunchError {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            });
        }
        self.launches.push(Launch {
            index,
            tokens: command.tokens(),
            output_at_launch: self.output.contents(),
        });
        Ok(RunResult::new(index, Some(self.exit_code)))
    }
}
