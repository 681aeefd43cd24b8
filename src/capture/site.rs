use std::sync::Arc;

use super::CaptureType;

/// A named placeholder bound to its type within one pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    name: Box<str>,
    kind: Arc<CaptureType>,
}

impl Capture {
    pub fn new<S: Into<String>>(name: S, kind: Arc<CaptureType>) -> Self {
        Self {
            name: name.into().into_boxed_str(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &CaptureType {
        &self.kind
    }
}
