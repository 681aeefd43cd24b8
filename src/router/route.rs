use crate::pattern::Pattern;

/// A named pattern with an application-defined target the router never
/// inspects.
#[derive(Debug, Clone)]
pub struct Route<T = ()> {
    name: Box<str>,
    pattern: Pattern,
    target: T,
}

impl<T> Route<T> {
    pub fn new<S: Into<String>>(name: S, pattern: Pattern, target: T) -> Self {
        Self {
            name: name.into().into_boxed_str(),
            pattern,
            target,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl Route<()> {
    pub fn bare<S: Into<String>>(name: S, pattern: Pattern) -> Self {
        Self::new(name, pattern, ())
    }
}
