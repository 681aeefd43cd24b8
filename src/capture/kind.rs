use regex::Regex;

use super::CaptureResult;
use super::CaptureValue;
use super::analysis::validate_subpattern;

/// Turns a value into path-safe segment text. `None` means the value is of
/// the wrong variant for this type.
pub type Serializer = fn(&CaptureValue) -> Option<String>;
/// Turns matched segment text into a value. Only ever called with text the
/// type's sub-pattern matched.
pub type Deserializer = fn(&str) -> CaptureValue;

/// Describes how one placeholder segment is matched and converted.
///
/// Construction validates that the sub-pattern can never consume `/` and
/// carries no flags or capturing groups, so every instance can be embedded
/// into a router's combined expression as-is.
#[derive(Debug, Clone)]
pub struct CaptureType {
    source: Box<str>,
    serialize: Serializer,
    deserialize: Deserializer,
    anchored: Regex,
}

impl CaptureType {
    pub fn new(
        subpattern: &str,
        serialize: Serializer,
        deserialize: Deserializer,
    ) -> CaptureResult<Self> {
        let anchored = validate_subpattern(subpattern)?;
        Ok(Self {
            source: subpattern.into(),
            serialize,
            deserialize,
            anchored,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn serialize(&self, value: &CaptureValue) -> Option<String> {
        (self.serialize)(value)
    }

    pub fn deserialize(&self, raw: &str) -> CaptureValue {
        (self.deserialize)(raw)
    }

    /// Whether `segment` is text this type would capture.
    pub fn accepts(&self, segment: &str) -> bool {
        self.anchored.is_match(segment)
    }
}

impl PartialEq for CaptureType {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
