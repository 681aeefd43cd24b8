pub mod capture;
pub mod path;
pub mod pattern;
pub mod router;
pub mod template;

pub use capture::{Capture, CaptureType, CaptureTypeError, CaptureValue};
pub use pattern::{Pattern, PatternError, Segment};
pub use router::{
    Captures, Route, RouteMatch, Router, RouterError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError, RouterResult,
};
pub use template::{CaptureTypes, TemplateError, parse_template};
