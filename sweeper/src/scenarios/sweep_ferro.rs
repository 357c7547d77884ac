use seal_sweep::{seed_formula, ConfigError, SweepSpec};
use std::path::Path;

/// Builds the overdamped ferrofluid seed sweep
///
/// Grows 500 particles under a constant external pressure and surface tension,
/// repeating the same configuration for seeds 1 through 100.
pub fn sweep_ferro(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Ferrofluid (overdamped)")
        .executable(executable)
        .presence("overdamped")
        .value("particles", 500)
        .value("iter", 120000)
        .value("growth", 6)
        .value("magnitude", 0.004)
        .value("pressure", 0.001)
        .value("surface-tension", 1.3)
        .formula(seed_formula("seed"))
        .count(100)
        .define()
}
