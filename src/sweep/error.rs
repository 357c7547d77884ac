use thiserror::Error;

/// An invalid sweep definition. Raised before any process is launched.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Start index {start_index} is past the last index {count}")]
    StartAfterCount { start_index: u32, count: u32 },
    #[error("Flag name must not be empty")]
    EmptyFlagName,
    #[error("Malformed flag name '{0}': names are written without dashes or whitespace")]
    MalformedFlagName(String),
    #[error("Flag -{flag} has a non-finite value at index {index}")]
    NonFiniteValue { flag: String, index: u32 },
    #[error("Flag -{flag} has negative value {value} at index {index}; the simulator would read it as a flag")]
    NegativeValue { flag: String, value: String, index: u32 },
    #[error("Flag -{flag} appears more than once at index {index}")]
    DuplicateFlag { flag: String, index: u32 },
    #[error("Flags at index {index} differ from the first point: expected {expected:?}, got {actual:?}")]
    InconsistentFlags {
        index: u32,
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// The operating system could not start the simulator.
#[derive(Debug, Error)]
#[error("Failed to launch `{command}`: {source}")]
pub struct LaunchError {
    pub command: String,
    #[source]
    pub source: std::io::Error,
}

/// Conditions that end a sweep early.
///
/// A simulator that runs and exits non-zero is not one of them.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Invalid sweep definition: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error("Failed to write progress: {0}")]
    Progress(#[from] std::io::Error),
}
