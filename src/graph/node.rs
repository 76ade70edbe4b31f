//! Node identifiers and numeric node/edge values

use super::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::str::FromStr;

/// Unique identifier for a node
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by NodeId be queried with a plain &str.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Numeric value carried by nodes (as their value) and edges (as their weight)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to f64 for comparisons and arithmetic
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(v) => v < 0,
            Number::Float(v) => v < 0.0,
        }
    }

    /// Reject values that cannot take part in numeric comparisons.
    ///
    /// `what` names the role of the value ("node value", "edge weight") in the
    /// resulting error.
    pub fn validate(self, what: &'static str) -> GraphResult<Self> {
        match self {
            Number::Float(v) if v.is_nan() => Err(GraphError::NotNumeric {
                what,
                found: "NaN".to_string(),
            }),
            n => Ok(n),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Keep a fractional part so the text parses back as a float.
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v.into())
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Self {
        Number::Int(v.into())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v.into())
    }
}

impl FromStr for Number {
    type Err = GraphError;

    /// Integers parse as `Int`, anything else numeric as `Float`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Number::Int(v));
        }
        match s.parse::<f64>() {
            Ok(v) => Number::Float(v).validate("number"),
            Err(_) => Err(GraphError::NotNumeric {
                what: "number",
                found: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&serde_json::Value> for Number {
    type Error = GraphError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let not_numeric = || GraphError::NotNumeric {
            what: "number",
            found: value.to_string(),
        };
        let serde_json::Value::Number(n) = value else {
            return Err(not_numeric());
        };
        if let Some(v) = n.as_i64() {
            Ok(Number::Int(v))
        } else {
            n.as_f64().map(Number::Float).ok_or_else(not_numeric)
        }
    }
}
