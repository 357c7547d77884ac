use std::io::{self, Write};

use crate::types::{RunResult, SweepProgress};

/// Receives the sweep's position around every run.
pub trait ProgressReporter: Send {
    /// Called before the run for `progress.index` is launched. The launch waits
    /// until this returns.
    fn starting(&mut self, progress: &SweepProgress) -> io::Result<()>;

    /// Called once the run has terminated.
    fn finished(&mut self, _progress: &SweepProgress, _result: &RunResult) -> io::Result<()> {
        Ok(())
    }

    /// Called after the last run of a completed sweep.
    fn complete(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes `==== Running with seed i/count ====` lines and flushes each one.
pub struct ConsoleProgress<W: Write + Send> {
    out: W,
}

impl ConsoleProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ProgressReporter for ConsoleProgress<W> {
    fn starting(&mut self, progress: &SweepProgress) -> io::Result<()> {
        writeln!(self.out, "{}", progress.banner())?;
        // the child shares this stream, the line must be out before it starts
        self.out.flush()
    }
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for Box<P> {
    fn starting(&mut self, progress: &SweepProgress) -> io::Result<()> {
        (**self).starting(progress)
    }

    fn finished(&mut self, progress: &SweepProgress, result: &RunResult) -> io::Result<()> {
        (**self).finished(progress, result)
    }

    fn complete(&mut self) -> io::Result<()> {
        (**self).complete()
    }
}
