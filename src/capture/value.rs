use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value extracted from, or substituted into, a capture segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptureValue {
    Integer(u64),
    Text(String),
}

impl CaptureValue {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            CaptureValue::Integer(value) => Some(*value),
            CaptureValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CaptureValue::Text(value) => Some(value),
            CaptureValue::Integer(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            CaptureValue::Integer(_) => "integer",
            CaptureValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for CaptureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureValue::Integer(value) => write!(f, "{value}"),
            CaptureValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for CaptureValue {
    fn from(value: u64) -> Self {
        CaptureValue::Integer(value)
    }
}

impl From<u32> for CaptureValue {
    fn from(value: u32) -> Self {
        CaptureValue::Integer(u64::from(value))
    }
}

impl From<String> for CaptureValue {
    fn from(value: String) -> Self {
        CaptureValue::Text(value)
    }
}

impl From<&str> for CaptureValue {
    fn from(value: &str) -> Self {
        CaptureValue::Text(value.to_string())
    }
}
