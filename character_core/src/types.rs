//! Core value types shared by stats and attributes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric kind required by an attribute definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Integer,
    Fractional,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => f.write_str("integer"),
            ValueKind::Fractional => f.write_str("fractional"),
        }
    }
}

/// A dynamically typed number, as accepted at the string-keyed boundary and
/// stored by the attribute set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Fractional,
        }
    }

    /// Numeric value for bound comparisons
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    /// The integer payload, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            Value::Float(_) => None,
        }
    }

    /// The fractional payload, if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v),
            Value::Int(_) => None,
        }
    }

    /// Build a value of the given kind from a bound. Integer bounds are whole
    /// numbers so the conversion is exact.
    pub(crate) fn from_bound(kind: ValueKind, bound: f64) -> Self {
        match kind {
            ValueKind::Integer => Value::Int(bound.floor() as i64),
            ValueKind::Fractional => Value::Float(bound),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:.2}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from(3).kind(), ValueKind::Integer);
        assert_eq!(Value::from(0.5).kind(), ValueKind::Fractional);
    }

    #[test]
    fn test_from_bound() {
        assert_eq!(Value::from_bound(ValueKind::Integer, 70.0), Value::Int(70));
        assert_eq!(Value::from_bound(ValueKind::Fractional, 1.0), Value::Float(1.0));
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&Value::Int(261)).unwrap();
        assert_eq!(json, "261");
        let parsed: Value = serde_json::from_str("0.04").unwrap();
        assert_eq!(parsed, Value::Float(0.04));
    }
}
