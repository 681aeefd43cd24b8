use crate::capture::Capture;

/// One `/`-delimited piece of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Capture(Capture),
}

impl Segment {
    pub fn as_capture(&self) -> Option<&Capture> {
        match self {
            Segment::Capture(capture) => Some(capture),
            Segment::Literal(_) => None,
        }
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::Literal(value.to_string())
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::Literal(value)
    }
}

impl From<Capture> for Segment {
    fn from(value: Capture) -> Self {
        Segment::Capture(value)
    }
}
