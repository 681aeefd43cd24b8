use hashbrown::HashSet;
use regex::escape;

use super::{PatternError, PatternResult, Segment};
use crate::capture::{Capture, CaptureValue};

/// A compiled path template: literal segments and typed captures.
///
/// The regex fragment has one capturing group per capture, in declaration
/// order, and no leading or trailing slash; the router supplies those.
#[derive(Debug, Clone)]
pub struct Pattern {
    segments: Vec<Segment>,
    capture_count: usize,
    static_path: Option<Box<str>>,
    static_reverse: Option<Box<str>>,
    prefer_trailing_slash: bool,
    fragment: String,
}

impl Pattern {
    #[tracing::instrument(level = "trace", skip(segments))]
    pub fn new<I, S>(segments: I, prefer_trailing_slash: bool) -> PatternResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().map(Into::into).collect();
        let mut fragments: Vec<String> = Vec::with_capacity(segments.len());

        let capture_count = {
            let mut names: HashSet<&str> = HashSet::with_capacity(segments.len());
            for (position, segment) in segments.iter().enumerate() {
                match segment {
                    Segment::Literal(literal) => fragments.push(escape(literal)),
                    Segment::Capture(capture) => {
                        if capture.name().is_empty() {
                            return Err(PatternError::EmptyCaptureName { position });
                        }
                        if !names.insert(capture.name()) {
                            return Err(PatternError::DuplicateCaptureName {
                                name: capture.name().to_string(),
                            });
                        }
                        fragments.push(format!("({})", capture.kind().source()));
                    }
                }
            }
            names.len()
        };

        let static_path = (capture_count == 0).then(|| join_static(&segments));
        let static_reverse = static_path.as_deref().map(|path| {
            if prefer_trailing_slash {
                format!("{path}/").into_boxed_str()
            } else {
                path.into()
            }
        });

        Ok(Self {
            fragment: fragments.join("/"),
            segments,
            capture_count,
            static_path,
            static_reverse,
            prefer_trailing_slash,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Captures in declaration order.
    pub fn captures(&self) -> impl Iterator<Item = &Capture> {
        self.segments.iter().filter_map(Segment::as_capture)
    }

    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    pub fn is_static(&self) -> bool {
        self.static_path.is_some()
    }

    /// The literal path, without any preferred trailing slash. Only set when
    /// the pattern has no captures.
    pub fn static_path(&self) -> Option<&str> {
        self.static_path.as_deref()
    }

    pub fn prefer_trailing_slash(&self) -> bool {
        self.prefer_trailing_slash
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Builds the canonical path, consuming one value per capture in order.
    /// Extra values are ignored.
    pub fn reverse(&self, values: &[CaptureValue]) -> PatternResult<String> {
        if let Some(path) = self.static_reverse.as_deref() {
            return Ok(path.to_string());
        }

        let mut out = String::new();
        let mut next_value = values.iter();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Capture(capture) => {
                    let value =
                        next_value
                            .next()
                            .ok_or_else(|| PatternError::MissingCaptureValue {
                                name: capture.name().to_string(),
                                expected: self.capture_count,
                                provided: values.len(),
                            })?;
                    out.push_str(&serialize_capture(capture, value)?);
                }
            }
        }

        if self.prefer_trailing_slash {
            out.push('/');
        }
        Ok(out)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.prefer_trailing_slash == other.prefer_trailing_slash
            && self.segments == other.segments
    }
}

fn join_static(segments: &[Segment]) -> Box<str> {
    let mut path = String::from("/");
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            path.push('/');
        }
        if let Segment::Literal(literal) = segment {
            path.push_str(literal);
        }
    }
    path.into_boxed_str()
}

fn serialize_capture(capture: &Capture, value: &CaptureValue) -> PatternResult<String> {
    let kind = capture.kind();
    let text = kind
        .serialize(value)
        .ok_or_else(|| PatternError::CaptureValueMismatch {
            name: capture.name().to_string(),
            found: value.kind_name(),
        })?;

    if !kind.accepts(&text) {
        return Err(PatternError::InvalidCaptureValue {
            name: capture.name().to_string(),
            value: text,
        });
    }
    Ok(text)
}
