pub mod flag;
pub mod command_line;
pub mod run_result;

pub use flag::{Flag, FlagValue};
pub use command_line::{CommandLine, ParameterPoint};
pub use run_result::{RunResult, SweepProgress};
