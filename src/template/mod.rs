mod error;
mod parser;
mod registry;

pub use error::{TemplateError, TemplateResult};
pub use parser::parse_template;
pub use registry::{CaptureTypes, DEFAULT_CAPTURE_TYPE};
