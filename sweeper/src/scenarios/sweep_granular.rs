use seal_sweep::{seed_formula, ConfigError, SweepSpec};
use std::path::Path;

/// Builds the overdamped granular seed sweep (200 particles, seeds 1 to 100)
pub fn sweep_granular(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Granular (overdamped)")
        .executable(executable)
        .presence("overdamped")
        .value("iter", 40000)
        .value("particles", 200)
        .value("magnitude", 0.005)
        .value("growth", 2)
        .value("repulsion", 1.8)
        .formula(seed_formula("seed"))
        .count(100)
        .define()
}
