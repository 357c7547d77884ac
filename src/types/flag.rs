use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric value passed to the simulator after a value flag.
///
/// Integers render without a fractional part. Floats render as the shortest
/// decimal string that reads back to the same `f64`, without exponent notation,
/// so the text never depends on the locale of the machine running the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Int(i64),
    Float(f64),
}

impl FlagValue {
    pub fn is_finite(&self) -> bool {
        match self {
            FlagValue::Int(_) => true,
            FlagValue::Float(value) => value.is_finite(),
        }
    }

    /// True when the rendered token would start with a dash, including `-0`.
    pub fn is_negative(&self) -> bool {
        match self {
            FlagValue::Int(value) => *value < 0,
            FlagValue::Float(value) => value.is_sign_negative(),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Int(value) => write!(f, "{}", value),
            FlagValue::Float(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<i32> for FlagValue {
    fn from(value: i32) -> Self {
        FlagValue::Int(value.into())
    }
}

impl From<u32> for FlagValue {
    fn from(value: u32) -> Self {
        FlagValue::Int(value.into())
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        FlagValue::Float(value)
    }
}

/// One simulator flag, stored without its leading dash.
#[derive(Debug, Clone, PartialEq)]
pub enum Flag {
    /// Enables a boolean mode; no value token follows it
    Presence(String),
    /// Followed by exactly one value token
    Value(String, FlagValue),
}

impl Flag {
    pub fn presence(name: impl Into<String>) -> Self {
        Flag::Presence(name.into())
    }

    pub fn value(name: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        Flag::Value(name.into(), value.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Flag::Presence(name) | Flag::Value(name, _) => name,
        }
    }

    /// Appends the tokens for this flag, `-name` then the value if there is one.
    pub fn push_tokens(&self, tokens: &mut Vec<String>) {
        match self {
            Flag::Presence(name) => tokens.push(format!("-{}", name)),
            Flag::Value(name, value) => {
                tokens.push(format!("-{}", name));
                tokens.push(value.to_string());
            }
        }
    }
}
