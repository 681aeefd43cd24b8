use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureTypeError {
    #[error("capture sub-pattern '{subpattern}' can match strings containing slashes")]
    MatchesSlash { subpattern: String },
    #[error("capture sub-pattern '{subpattern}' cannot specify flags (at byte {index})")]
    FlagsNotAllowed { subpattern: String, index: usize },
    #[error("capture sub-pattern '{subpattern}' cannot contain capturing groups (at byte {index})")]
    CapturingGroupNotAllowed { subpattern: String, index: usize },
    #[error("capture sub-pattern '{subpattern}' is malformed at byte {index}: {reason}")]
    Syntax {
        subpattern: String,
        index: usize,
        reason: &'static str,
    },
    #[error("capture sub-pattern '{subpattern}' uses unsupported syntax at byte {index}: {construct}")]
    Unsupported {
        subpattern: String,
        index: usize,
        construct: &'static str,
    },
    #[error("capture sub-pattern '{subpattern}' failed to compile: {error}")]
    RegexInvalid { subpattern: String, error: String },
}

pub type CaptureResult<T> = Result<T, CaptureTypeError>;
