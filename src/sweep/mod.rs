//! Sweep definitions and the engine that walks them.
//! A sweep is plain data: the flags every run shares, a formula for the flags
//! that depend on the running variable, and the index range to cover.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::types::{CommandLine, Flag, FlagValue, ParameterPoint};

pub mod error;
pub mod launcher;
pub mod progress;
pub mod runner;

pub use error::{ConfigError, LaunchError, SweepError};
pub use runner::{run_sweep, SweepReport, SweepRunner};

#[cfg(test)]
mod tests;

/// Default path of the simulator, relative to the working directory.
pub const DEFAULT_EXECUTABLE: &str = "./seals";

/// Maps the running variable to the flags that depend on it.
pub type ParameterFormula = Arc<dyn Fn(u32) -> Vec<Flag> + Send + Sync>;

/// Formula for seed sweeps: a single value flag carrying the index itself.
pub fn seed_formula(flag: &str) -> impl Fn(u32) -> Vec<Flag> + Send + Sync + 'static {
    let flag = flag.to_string();
    move |seed| vec![Flag::value(flag.clone(), seed)]
}

// ------------------------------------------------------------------------------------------------
// Sweep Specification
// ------------------------------------------------------------------------------------------------

/// A validated sweep, covering every index in `start_index..=count` in order.
#[derive(Clone)]
pub struct SweepSpec {
    name: String,
    executable: PathBuf,
    running_variable: String,
    fixed_flags: Vec<Flag>,
    formula: ParameterFormula,
    count: u32,
    start_index: u32,
}

impl fmt::Debug for SweepSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweepSpec")
            .field("name", &self.name)
            .field("executable", &self.executable)
            .field("running_variable", &self.running_variable)
            .field("fixed_flags", &self.fixed_flags)
            .field("count", &self.count)
            .field("start_index", &self.start_index)
            .finish_non_exhaustive()
    }
}

impl SweepSpec {
    pub fn builder(name: &str) -> SweepSpecBuilder {
        SweepSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn running_variable(&self) -> &str {
        &self.running_variable
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    /// Number of runs the sweep performs.
    pub fn run_count(&self) -> u64 {
        u64::from(self.count - self.start_index) + 1
    }

    /// Fixed flags followed by the formula's flags for `index`.
    pub fn point(&self, index: u32) -> ParameterPoint {
        let mut flags = self.fixed_flags.clone();
        flags.extend((self.formula)(index));
        ParameterPoint { index, flags }
    }

    pub fn command_line(&self, index: u32) -> CommandLine {
        CommandLine::render(&self.executable, &self.point(index))
    }

    /// Points in run order, derived one at a time.
    pub fn points(&self) -> impl Iterator<Item = ParameterPoint> + '_ {
        (self.start_index..=self.count).map(move |index| self.point(index))
    }

    /// Same sweep over a different index range, e.g. to resume at a later seed.
    pub fn with_range(&self, start_index: u32, count: u32) -> Result<Self, ConfigError> {
        let spec = Self {
            start_index,
            count,
            ..self.clone()
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Checks every point of the range so that a bad definition fails before any launch.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.count < self.start_index {
            return Err(ConfigError::StartAfterCount {
                start_index: self.start_index,
                count: self.count,
            });
        }
        let mut expected: Option<Vec<String>> = None;
        for point in self.points() {
            let names = validate_point(&point)?;
            match &expected {
                None => expected = Some(names),
                Some(first) if *first != names => {
                    return Err(ConfigError::InconsistentFlags {
                        index: point.index,
                        expected: first.clone(),
                        actual: names,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

fn validate_flag_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyFlagName);
    }
    if name.starts_with('-') || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::MalformedFlagName(name.to_string()));
    }
    Ok(())
}

fn validate_value(name: &str, value: &FlagValue, index: u32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteValue {
            flag: name.to_string(),
            index,
        });
    }
    if value.is_negative() {
        return Err(ConfigError::NegativeValue {
            flag: name.to_string(),
            value: value.to_string(),
            index,
        });
    }
    Ok(())
}

/// Validates one point and returns its flag names in order.
fn validate_point(point: &ParameterPoint) -> Result<Vec<String>, ConfigError> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(point.flags.len());
    for flag in &point.flags {
        let name = flag.name();
        validate_flag_name(name)?;
        if let Flag::Value(_, value) = flag {
            validate_value(name, value, point.index)?;
        }
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateFlag {
                flag: name.to_string(),
                index: point.index,
            });
        }
        names.push(name.to_string());
    }
    Ok(names)
}

// ------------------------------------------------------------------------------------------------
// Builder
// ------------------------------------------------------------------------------------------------

/// Collects a sweep definition; `define` validates it.
pub struct SweepSpecBuilder {
    name: String,
    executable: PathBuf,
    running_variable: String,
    fixed_flags: Vec<Flag>,
    formula: ParameterFormula,
    count: u32,
    start_index: u32,
}

impl SweepSpecBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            running_variable: "seed".to_string(),
            fixed_flags: Vec::new(),
            formula: Arc::new(seed_formula("seed")),
            count: 0,
            start_index: 1,
        }
    }

    pub fn executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn running_variable(mut self, name: &str) -> Self {
        self.running_variable = name.to_string();
        self
    }

    pub fn presence(mut self, name: &str) -> Self {
        self.fixed_flags.push(Flag::presence(name));
        self
    }

    pub fn value(mut self, name: &str, value: impl Into<FlagValue>) -> Self {
        self.fixed_flags.push(Flag::value(name, value));
        self
    }

    pub fn fixed_flags(mut self, flags: Vec<Flag>) -> Self {
        self.fixed_flags.extend(flags);
        self
    }

    pub fn formula<F>(mut self, formula: F) -> Self
    where
        F: Fn(u32) -> Vec<Flag> + Send + Sync + 'static,
    {
        self.formula = Arc::new(formula);
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn define(self) -> Result<SweepSpec, ConfigError> {
        let spec = SweepSpec {
            name: self.name,
            executable: self.executable,
            running_variable: self.running_variable,
            fixed_flags: self.fixed_flags,
            formula: self.formula,
            count: self.count,
            start_index: self.start_index,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Defines a seed sweep against the default executable.
pub fn define_sweep<F>(
    fixed_flags: Vec<Flag>,
    formula: F,
    count: u32,
    start_index: u32,
) -> Result<SweepSpec, ConfigError>
where
    F: Fn(u32) -> Vec<Flag> + Send + Sync + 'static,
{
    SweepSpec::builder("sweep")
        .fixed_flags(fixed_flags)
        .formula(formula)
        .count(count)
        .start_index(start_index)
        .define()
}
