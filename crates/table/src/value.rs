//! Cell value representation for tables.

use serde::{Deserialize, Serialize};

/// A single table cell.
///
/// `Value` holds the scalar produced by inferring the type of one CSV field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean value
    Bool(bool),

    /// String value
    String(String),

    /// Null value (empty CSV field)
    Null,
}

impl Value {
    /// Infer a value from a raw CSV field.
    ///
    /// Tries integer, then float, then boolean; an empty field becomes
    /// null and everything else stays a string.
    pub fn infer(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            Value::Int(n)
        } else if let Ok(f) = raw.parse::<f64>() {
            Value::Float(f)
        } else if let Ok(b) = raw.parse::<bool>() {
            Value::Bool(b)
        } else if raw.is_empty() {
            Value::Null
        } else {
            Value::String(raw.to_string())
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    /// Render the value as a CSV field. Null renders as the empty field.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Null => Ok(()),
        }
    }
}
