use thiserror::Error;

use crate::pattern::PatternError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{template}' must begin with a slash")]
    MissingLeadingSlash { template: String },
    #[error("placeholder in template '{template}' must be a complete path segment")]
    IncompleteSegment { template: String },
    #[error("placeholder starting at byte {start} in template '{template}' is not closed")]
    UnterminatedPlaceholder { template: String, start: usize },
    #[error("unexpected '}}' at byte {index} in template '{template}'")]
    UnexpectedClosingBrace { template: String, index: usize },
    #[error("unknown capture type '{type_name}' for placeholder '{name}' in template '{template}'")]
    UnknownCaptureType {
        template: String,
        name: String,
        type_name: String,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
