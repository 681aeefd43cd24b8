use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("capture name at segment {position} is empty")]
    EmptyCaptureName { position: usize },
    #[error("duplicate capture name: '{name}'")]
    DuplicateCaptureName { name: String },
    #[error("missing value for capture '{name}' (expected {expected} values, got {provided})")]
    MissingCaptureValue {
        name: String,
        expected: usize,
        provided: usize,
    },
    #[error("capture '{name}' cannot serialize a {found} value")]
    CaptureValueMismatch { name: String, found: &'static str },
    #[error("value '{value}' for capture '{name}' does not match its sub-pattern")]
    InvalidCaptureValue { name: String, value: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
