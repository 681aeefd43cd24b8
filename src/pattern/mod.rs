mod compiled;
mod error;
mod segment;

pub use compiled::Pattern;
pub use error::{PatternError, PatternResult};
pub use segment::Segment;
