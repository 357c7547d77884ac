/// Terminating status of one simulator invocation.
///
/// Only the exit status is kept; the child's output goes straight to the
/// driver's own streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Running-variable value the run was launched with
    pub index: u32,
    /// Exit code, or `None` when the child was ended by a signal
    pub exit_code: Option<i32>,
}

impl RunResult {
    pub fn new(index: u32, exit_code: Option<i32>) -> Self {
        Self { index, exit_code }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Position of the sweep, used only to print progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepProgress {
    /// Name of the running variable, e.g. `seed` or `scale`
    pub running_variable: String,
    pub index: u32,
    pub count: u32,
}

impl SweepProgress {
    /// The line printed before each run, e.g. `==== Running with seed 3/100 ====`.
    pub fn banner(&self) -> String {
        format!(
            "==== Running with {} {}/{} ====",
            self.running_variable, self.index, self.count
        )
    }
}
