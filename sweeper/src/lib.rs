pub mod config;
pub mod scenarios;
pub mod sweep_registry;
pub mod interface;
pub mod progress_bar;
pub mod cli;

pub use config::{Config, ConfigError, SweepFile};
pub use sweep_registry::{SweepKind, SweepRegistry};
pub use scenarios::utils::RunOptions;
