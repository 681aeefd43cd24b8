use hashbrown::HashMap as FastHashMap;
use std::sync::Arc;

use crate::capture::{CaptureType, integer_type, text_type};

/// Type used by `{name}` placeholders that do not name one.
pub const DEFAULT_CAPTURE_TYPE: &str = "text";

/// Capture types addressable by name from templates (`{id:int}`).
///
/// Starts out with `int`, `id` (an alias of `int`) and `text`.
#[derive(Debug, Clone)]
pub struct CaptureTypes {
    types: FastHashMap<Box<str>, Arc<CaptureType>>,
}

impl Default for CaptureTypes {
    fn default() -> Self {
        let mut types = Self::empty();
        types.register("int", integer_type());
        types.register("id", integer_type());
        types.register(DEFAULT_CAPTURE_TYPE, text_type());
        types
    }
}

impl CaptureTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry without the built-ins.
    pub fn empty() -> Self {
        Self {
            types: FastHashMap::new(),
        }
    }

    /// Adds or replaces a type, returning the one it replaced.
    pub fn register<S: Into<String>>(
        &mut self,
        name: S,
        kind: Arc<CaptureType>,
    ) -> Option<Arc<CaptureType>> {
        self.types.insert(name.into().into_boxed_str(), kind)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<CaptureType>> {
        self.types.get(name)
    }
}
