pub mod types;
pub mod sweep;
pub mod utils;

pub use types::{CommandLine, Flag, FlagValue, ParameterPoint, RunResult, SweepProgress};
pub use sweep::{
    define_sweep, run_sweep, seed_formula, ConfigError, LaunchError, ParameterFormula, SweepError, SweepReport,
    SweepRunner, SweepSpec, SweepSpecBuilder, DEFAULT_EXECUTABLE,
};
pub use sweep::launcher::{DryRunLauncher, Launcher, ProcessLauncher};
pub use sweep::progress::{ConsoleProgress, ProgressReporter};
