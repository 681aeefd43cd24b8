use smallvec::SmallVec;

use super::Route;
use crate::capture::CaptureValue;

type CaptureEntries<'r> = SmallVec<[(&'r str, CaptureValue); 4]>;

/// Typed capture values keyed by capture name, in the route's capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'r> {
    entries: CaptureEntries<'r>,
}

impl<'r> Captures<'r> {
    /// What every static match carries; never allocates.
    pub fn empty() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'r str, value: CaptureValue) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&CaptureValue> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'r str, &CaptureValue)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// Values in capture order, ready to hand back to `reverse`.
    pub fn values(&self) -> Vec<CaptureValue> {
        self.entries.iter().map(|(_, value)| value.clone()).collect()
    }
}

/// A successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    pub route: &'r Route<T>,
    pub captures: Captures<'r>,
}

impl<'r, T> RouteMatch<'r, T> {
    pub fn name(&self) -> &'r str {
        self.route.name()
    }

    pub fn target(&self) -> &'r T {
        self.route.target()
    }
}
