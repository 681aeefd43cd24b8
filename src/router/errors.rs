use crate::pattern::PatternError;
use thiserror::Error;

use super::RouterOptionsError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route name is empty (route #{index})")]
    EmptyRouteName { index: usize },
    #[error("duplicate route name: '{name}'")]
    DuplicateRouteName { name: String },
    #[error("unknown route '{name}'")]
    UnknownRoute { name: String },
    #[error("failed to compile combined route expression: {error}")]
    RegexBuild { error: String },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error("cannot reverse route '{route}': {source}")]
    Reverse {
        route: String,
        #[source]
        source: PatternError,
    },
}

pub type RouterResult<T> = Result<T, RouterError>;
