mod analysis;
pub mod ast;
mod builtin;
mod error;
mod kind;
mod parser;
mod site;
mod value;

pub use analysis::{SLASH, matches_code_point, validate_subpattern};
pub use builtin::{
    INTEGER_SUBPATTERN, TEXT_SUBPATTERN, integer, integer_type, text, text_type,
};
pub use error::{CaptureResult, CaptureTypeError};
pub use kind::{CaptureType, Deserializer, Serializer};
pub use parser::parse_subpattern;
pub use site::Capture;
pub use value::CaptureValue;
