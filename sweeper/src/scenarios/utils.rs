use chrono::Local;
use seal_sweep::utils::logging;
use seal_sweep::{
    ConsoleProgress, DryRunLauncher, Launcher, ProcessLauncher, ProgressReporter, SweepReport, SweepRunner, SweepSpec,
};
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::progress_bar::BarProgress;

/// How a sweep is run, after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub executable: PathBuf,
    /// Overrides the sweep's first index
    pub start: Option<u32>,
    /// Overrides the sweep's last index
    pub count: Option<u32>,
    pub dry_run: bool,
    pub progress_bar: bool,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            executable: config.executable.clone(),
            start: None,
            count: None,
            dry_run: false,
            progress_bar: config.progress_bar,
        }
    }

    /// Applies the range overrides, re-validating the sweep over the new range.
    pub fn apply_range(&self, spec: SweepSpec) -> Result<SweepSpec, ConfigError> {
        if self.start.is_none() && self.count.is_none() {
            return Ok(spec);
        }
        let start = self.start.unwrap_or(spec.start_index());
        let count = self.count.unwrap_or(spec.count());
        Ok(spec.with_range(start, count)?)
    }
}

/// Runs one sweep with the launcher and progress output selected by `options`.
pub async fn run_spec(spec: &SweepSpec, options: &RunOptions) -> Result<SweepReport, ConfigError> {
    log_sweep_start(spec, options);

    let launcher: Box<dyn Launcher> = if options.dry_run {
        Box::new(DryRunLauncher::stdout())
    } else {
        Box::new(ProcessLauncher::new())
    };
    let reporter: Box<dyn ProgressReporter> = if options.progress_bar {
        Box::new(BarProgress::stdout(spec.run_count()))
    } else {
        Box::new(ConsoleProgress::stdout())
    };

    let report = SweepRunner::new(launcher, reporter).run(spec).await?;

    let failures = report.failures();
    if failures.is_empty() {
        logging::log("SWEEPER", &format!("{} completed, every run exited cleanly", spec.name()));
    } else {
        logging::log(
            "SWEEPER",
            &format!("{} completed, {} of {} runs exited non-zero", spec.name(), failures.len(), report.results.len()),
        );
    }
    Ok(report)
}

fn log_sweep_start(spec: &SweepSpec, options: &RunOptions) {
    let start_time = Local::now();
    logging::log("SWEEPER", &format!("=== Running {} ===", spec.name()));
    logging::log("SWEEPER", &format!("Start Time: {}", start_time.format("%Y-%m-%d %H:%M:%S")));
    logging::log("SWEEPER", &format!("Executable: {}", spec.executable().display()));
    logging::log(
        "SWEEPER",
        &format!("{}: {} to {}", spec.running_variable(), spec.start_index(), spec.count()),
    );
    if options.dry_run {
        logging::log("SWEEPER", "Dry run: commands are printed, not executed");
    }
}
