use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);

/// Construction-time knobs. None of them change which route a path matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    /// Upper bound on the compiled size of the combined dynamic expression.
    pub regex_size_limit: usize,
    /// Cache size for the lazy DFA used while matching.
    pub dfa_size_limit: usize,
    /// Emit a debug event for every lookup.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.regex_size_limit == 0 {
            return Err(RouterOptionsError::RegexSizeLimitInvalid {
                provided: self.regex_size_limit,
            });
        }
        if self.dfa_size_limit == 0 {
            return Err(RouterOptionsError::DfaSizeLimitInvalid {
                provided: self.dfa_size_limit,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn regex_size_limit(mut self, value: usize) -> Self {
        self.options.regex_size_limit = value;
        self
    }

    pub fn dfa_size_limit(mut self, value: usize) -> Self {
        self.options.dfa_size_limit = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("regex_size_limit must be at least 1 (got {provided})")]
    RegexSizeLimitInvalid { provided: usize },
    #[error("dfa_size_limit must be at least 1 (got {provided})")]
    DfaSizeLimitInvalid { provided: usize },
}
