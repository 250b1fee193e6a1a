pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod output;
pub mod paginate;
pub mod parser;
pub mod prompt;
pub mod source;
pub mod stats;

pub use error::{BikeshareError, Result, ValidationError};
