//! Configuration loader and validator for the sweeper.
//! Handles the optional `sweeper.toml` driver settings and custom sweep files.

use seal_sweep::{seed_formula, FlagValue, SweepError, SweepSpec, DEFAULT_EXECUTABLE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "sweeper.toml";

// ------------------------------------------------------------------------------------------------
// Driver Configuration
// ------------------------------------------------------------------------------------------------

/// Settings shared by every sweep the driver runs.
///
/// Every field is optional in the file; command-line flags take precedence.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the simulator executable
    pub executable: PathBuf,
    /// Draw an indicatif progress bar on stderr next to the progress lines
    pub progress_bar: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            progress_bar: false,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Custom Sweep Files
// ------------------------------------------------------------------------------------------------

/// A seed sweep described in TOML instead of code.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SweepFile {
    pub name: String,
    /// Flags passed without a value, in order
    #[serde(default)]
    pub presence_flags: Vec<String>,
    /// Flags passed with a fixed value, in order, after the presence flags
    #[serde(default)]
    pub value_flags: Vec<ValueFlag>,
    /// Flag that carries the seed; always rendered last
    #[serde(default = "default_seed_flag")]
    pub seed_flag: String,
    pub count: u32,
    #[serde(default = "default_start_index")]
    pub start_index: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValueFlag {
    pub name: String,
    pub value: FlagValue,
}

fn default_seed_flag() -> String {
    "seed".to_string()
}

fn default_start_index() -> u32 {
    1
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Sweep(#[from] SweepError),
}

impl From<seal_sweep::ConfigError> for ConfigError {
    fn from(error: seal_sweep::ConfigError) -> Self {
        ConfigError::Sweep(SweepError::Config(error))
    }
}

// ------------------------------------------------------------------------------------------------
// Configuration Implementation Methods
// ------------------------------------------------------------------------------------------------

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml_str(&config_str)
    }

    /// Loads `path`, or `sweeper.toml` when no path is given and that file exists,
    /// or falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load(Path::new(DEFAULT_CONFIG_PATH)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.executable.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError("Executable path must not be empty".into()));
        }
        Ok(())
    }
}

impl SweepFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let sweep_str = fs::read_to_string(path)?;
        Self::from_toml_str(&sweep_str)
    }

    pub fn from_toml_str(sweep_str: &str) -> Result<Self, ConfigError> {
        let sweep: SweepFile = toml::from_str(sweep_str)?;
        if sweep.name.trim().is_empty() {
            return Err(ConfigError::ValidationError("Sweep name must not be empty".into()));
        }
        Ok(sweep)
    }

    /// Builds the sweep; flag names and values are checked by the definition.
    pub fn to_spec(&self, executable: &Path) -> Result<SweepSpec, ConfigError> {
        let mut builder = SweepSpec::builder(&self.name).executable(executable);
        for name in &self.presence_flags {
            builder = builder.presence(name);
        }
        for flag in &self.value_flags {
            builder = builder.value(&flag.name, flag.value);
        }
        let spec = builder
            .formula(seed_formula(&self.seed_flag))
            .start_index(self.start_index)
            .count(self.count)
            .define()?;
        Ok(spec)
    }
}
