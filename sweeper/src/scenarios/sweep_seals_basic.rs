use seal_sweep::{seed_formula, ConfigError, SweepSpec};
use std::path::Path;

/// First seed still to run; seeds 1 to 11 of this campaign are already done.
pub const RESUME_AT_SEED: u32 = 12;

/// Builds the basic seal sweep, resuming at seed 12 of 100
pub fn sweep_seals_basic(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Seals (basic)")
        .executable(executable)
        .presence("seals")
        .formula(seed_formula("seed"))
        .start_index(RESUME_AT_SEED)
        .count(100)
        .define()
}
