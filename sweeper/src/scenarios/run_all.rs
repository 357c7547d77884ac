use seal_sweep::utils::logging;
use seal_sweep::SweepReport;
use std::time::Instant;

use super::utils::{run_spec, RunOptions};
use crate::config::ConfigError;
use crate::sweep_registry::SweepRegistry;

/// Runs every registered sweep in menu order.
///
/// Stops at the first sweep that cannot be defined or launched; seeds that
/// exit non-zero do not count as failures.
pub async fn run_all_sweeps(options: &RunOptions) -> Result<Vec<SweepReport>, ConfigError> {
    let start_time = Instant::now();
    logging::log("SWEEPER", "=== Starting All Sweeps ===");

    let mut reports = Vec::new();
    for definition in SweepRegistry::global().definitions() {
        let spec = (definition.build)(&options.executable)?;
        reports.push(run_spec(&spec, options).await?);
    }

    logging::log("SWEEPER", "=== All Sweeps Completed ===");
    logging::log("SWEEPER", &format!("Total execution time: {:.2?}", start_time.elapsed()));
    Ok(reports)
}
