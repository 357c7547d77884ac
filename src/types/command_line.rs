use std::fmt;
use std::path::{Path, PathBuf};

use super::{Flag, FlagValue};

/// One fully resolved set of flags for a single simulator run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterPoint {
    /// Value of the running variable for this point
    pub index: u32,
    /// Fixed flags followed by the flags derived from `index`, in command-line order
    pub flags: Vec<Flag>,
}

impl ParameterPoint {
    /// Returns the value of a value flag, if the point carries it.
    pub fn value_of(&self, name: &str) -> Option<FlagValue> {
        self.flags.iter().find_map(|flag| match flag {
            Flag::Value(flag_name, value) if flag_name == name => Some(*value),
            _ => None,
        })
    }

    pub fn has_presence(&self, name: &str) -> bool {
        self.flags
            .iter()
            .any(|flag| matches!(flag, Flag::Presence(flag_name) if flag_name == name))
    }
}

/// The program and argument tokens handed to the operating system for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandLine {
    /// Renders a parameter point. The result depends only on the program and the point.
    pub fn render(program: &Path, point: &ParameterPoint) -> Self {
        let mut args = Vec::with_capacity(point.flags.len() * 2);
        for flag in &point.flags {
            flag.push_tokens(&mut args);
        }
        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program path followed by every argument token.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}
