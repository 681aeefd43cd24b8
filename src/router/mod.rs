mod errors;
mod matched;
mod options;
mod route;
mod service;

pub use errors::{RouterError, RouterResult};
pub use matched::{Captures, RouteMatch};
pub use options::{
    DEFAULT_DFA_SIZE_LIMIT, DEFAULT_REGEX_SIZE_LIMIT, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError,
};
pub use route::Route;
pub use service::Router;
