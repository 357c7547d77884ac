use seal_sweep::{seed_formula, ConfigError, SweepSpec};
use std::path::Path;

/// Builds the seals seed sweep with repulsion limited to neighbours (seeds 1 to 100)
pub fn sweep_seals_neighbour(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Seals (neighbour-limited repulsion)")
        .executable(executable)
        .presence("seals")
        .presence("rep-max-neighbour")
        .formula(seed_formula("seed"))
        .count(100)
        .define()
}
