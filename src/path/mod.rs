mod query;

pub use query::strip_query;
