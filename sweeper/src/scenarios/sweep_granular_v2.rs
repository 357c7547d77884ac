use seal_sweep::{seed_formula, ConfigError, SweepSpec};
use std::path::Path;

/// Builds the second overdamped granular seed sweep
///
/// 600 particles compressed toward a final target volume under a small pressure,
/// for seeds 1 through 20.
pub fn sweep_granular_v2(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Granular v2 (overdamped)")
        .executable(executable)
        .presence("overdamped")
        .value("iter", 120000)
        .value("particles", 600)
        .value("magnitude", 0.005)
        .value("growth", 5)
        .value("repulsion", 1.8)
        .value("final-target-volume", 0.01)
        .value("pressure", 0.00005)
        .formula(seed_formula("seed"))
        .count(20)
        .define()
}
