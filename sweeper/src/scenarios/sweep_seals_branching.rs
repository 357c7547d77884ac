use seal_sweep::{seed_formula, ConfigError, SweepSpec};
use std::path::Path;

/// Fraction of the growth after which branching stops.
pub const STOP_BRANCHING_AFTER: f64 = 169.0 / 249.0;

/// Builds the bounded-branching seal sweep
///
/// Repulsion is limited to neighbours, branching stops after
/// [`STOP_BRANCHING_AFTER`] of the growth and leaves may sit at most two
/// segments away from the tree.
pub fn sweep_seals_branching(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Seals (bounded branching)")
        .executable(executable)
        .presence("seals")
        .presence("rep-max-neighbour")
        .value("stop-branching-after", STOP_BRANCHING_AFTER)
        .value("max-leaf-distance", 2)
        .formula(seed_formula("seed"))
        .count(100)
        .define()
}
