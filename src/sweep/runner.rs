use super::error::SweepError;
use super::launcher::{Launcher, ProcessLauncher};
use super::progress::{ConsoleProgress, ProgressReporter};
use super::SweepSpec;
use crate::types::{CommandLine, RunResult, SweepProgress};
use crate::utils::logging;

/// Exit statuses of a sweep that ran to the end, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub sweep_name: String,
    pub results: Vec<RunResult>,
}

impl SweepReport {
    /// Indices whose run did not exit with code 0.
    pub fn failures(&self) -> Vec<u32> {
        self.results
            .iter()
            .filter(|result| !result.success())
            .map(|result| result.index)
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(RunResult::success)
    }
}

/// Walks a sweep one point at a time with the given launcher and progress reporter.
pub struct SweepRunner<L, P> {
    launcher: L,
    reporter: P,
}

impl SweepRunner<ProcessLauncher, ConsoleProgress<std::io::Stdout>> {
    /// Real child processes, progress lines on stdout.
    pub fn console() -> Self {
        Self::new(ProcessLauncher::new(), ConsoleProgress::stdout())
    }
}

impl<L: Launcher, P: ProgressReporter> SweepRunner<L, P> {
    pub fn new(launcher: L, reporter: P) -> Self {
        Self { launcher, reporter }
    }

    pub fn into_parts(self) -> (L, P) {
        (self.launcher, self.reporter)
    }

    /// Runs every point of `spec` in increasing index order, one at a time.
    ///
    /// The simulator's exit code is recorded and otherwise ignored: a failing
    /// run never stops the sweep. A run that cannot be launched ends the sweep
    /// immediately with [`SweepError::Launch`].
    pub async fn run(&mut self, spec: &SweepSpec) -> Result<SweepReport, SweepError> {
        self.log_sweep_start(spec);

        let mut results = Vec::new();
        for point in spec.points() {
            let progress = SweepProgress {
                running_variable: spec.running_variable().to_string(),
                index: point.index,
                count: spec.count(),
            };
            let command = CommandLine::render(spec.executable(), &point);

            self.reporter.starting(&progress)?;
            let result = self.launcher.launch(point.index, &command).await.map_err(|e| {
                logging::log(
                    "SWEEP",
                    &format!("Sweep '{}' aborted at {} {}: {}", spec.name(), spec.running_variable(), point.index, e),
                );
                e
            })?;

            if result.success() {
                logging::log("SWEEP", &format!("{} {} finished", spec.running_variable(), point.index));
            } else {
                tracing::warn!(
                    "{} {} of sweep '{}' exited with {:?}; continuing",
                    spec.running_variable(),
                    point.index,
                    spec.name(),
                    result.exit_code
                );
            }
            self.reporter.finished(&progress, &result)?;
            results.push(result);
        }
        self.reporter.complete()?;

        let report = SweepReport {
            sweep_name: spec.name().to_string(),
            results,
        };
        self.log_sweep_end(spec, &report);
        Ok(report)
    }

    fn log_sweep_start(&self, spec: &SweepSpec) {
        logging::log("SWEEP", &format!("=== Sweep {} ===", spec.name()));
        logging::log("SWEEP", &format!("Executable: {}", spec.executable().display()));
        logging::log(
            "SWEEP",
            &format!("{} range: {}..={} ({} runs)", spec.running_variable(), spec.start_index(), spec.count(), spec.run_count()),
        );
    }

    fn log_sweep_end(&self, spec: &SweepSpec, report: &SweepReport) {
        logging::log("SWEEP", &format!("=== Sweep {} Complete ===", spec.name()));
        logging::log("SWEEP", &format!("Runs completed: {}", report.results.len()));
        let failures = report.failures();
        if !failures.is_empty() {
            logging::log(
                "SWEEP",
                &format!("Non-zero exits for {}: {:?}", spec.running_variable(), failures),
            );
        }
    }
}

/// Runs `spec` against the real simulator with progress lines on stdout.
pub async fn run_sweep(spec: &SweepSpec) -> Result<SweepReport, SweepError> {
    SweepRunner::console().run(spec).await
}
