#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod fetch;
pub mod inspect;
pub mod migrate;
pub mod patch;
pub mod report;
pub mod stylesheet;
pub mod translate;
pub mod util;
pub mod validate;

pub use cli::run_from_env;
pub use error::{MigrateError, Result};
