use seal_sweep::{ConfigError, Flag, SweepSpec};
use std::path::Path;

/// Scale at which the backbone dimension is computed.
pub const SCALE: u32 = 5;

/// Flags that depend on the scale `s`.
///
/// Lengths shrink as `1/s`, the boundary target density grows as `s` and the
/// iteration count as `s^1.5`, rounded to the nearest integer.
pub fn backbone_flags(scale: u32) -> Vec<Flag> {
    let s = f64::from(scale);
    vec![
        Flag::value("magnitude", 0.01 / s),
        Flag::value("boundary-radius", 0.05 / s),
        Flag::value("boundary-target-density", 50 * i64::from(scale)),
        Flag::value("iter", (20000.0 * s.powf(1.5)).round() as i64),
    ]
}

/// Builds the backbone-dimension run: a single point at [`SCALE`]
pub fn sweep_backbone_dim(executable: &Path) -> Result<SweepSpec, ConfigError> {
    SweepSpec::builder("Seals backbone dimension")
        .executable(executable)
        .running_variable("scale")
        .presence("seals")
        .presence("rep-max-neighbour")
        .presence("compute-backbone-dim")
        .formula(backbone_flags)
        .start_index(SCALE)
        .count(SCALE)
        .define()
}
