use std::sync::{Arc, LazyLock};

use super::{Capture, CaptureType, CaptureValue};

/// 1 to 15 ASCII digits, no leading zero; every match fits in 2^53.
pub const INTEGER_SUBPATTERN: &str = "[1-9][0-9]{0,14}";
pub const TEXT_SUBPATTERN: &str = "[^/]+";

static INTEGER: LazyLock<Arc<CaptureType>> = LazyLock::new(|| {
    Arc::new(
        CaptureType::new(INTEGER_SUBPATTERN, serialize_integer, deserialize_integer)
            .expect("integer sub-pattern should validate"),
    )
});

static TEXT: LazyLock<Arc<CaptureType>> = LazyLock::new(|| {
    Arc::new(
        CaptureType::new(TEXT_SUBPATTERN, serialize_text, deserialize_text)
            .expect("text sub-pattern should validate"),
    )
});

fn serialize_integer(value: &CaptureValue) -> Option<String> {
    value.as_integer().map(|n| n.to_string())
}

fn deserialize_integer(raw: &str) -> CaptureValue {
    match raw.parse::<u64>() {
        Ok(value) => CaptureValue::Integer(value),
        Err(_) => CaptureValue::Text(raw.to_string()),
    }
}

fn serialize_text(value: &CaptureValue) -> Option<String> {
    value.as_text().map(str::to_string)
}

fn deserialize_text(raw: &str) -> CaptureValue {
    CaptureValue::Text(raw.to_string())
}

pub fn integer_type() -> Arc<CaptureType> {
    Arc::clone(&INTEGER)
}

pub fn text_type() -> Arc<CaptureType> {
    Arc::clone(&TEXT)
}

/// An integer placeholder named `name`.
pub fn integer<S: Into<String>>(name: S) -> Capture {
    Capture::new(name, integer_type())
}

/// A free-text placeholder named `name`.
pub fn text<S: Into<String>>(name: S) -> Capture {
    Capture::new(name, text_type())
}
