#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod parse;
pub mod theme;

pub use cli::run_from_env;
pub use error::{Result, ThemeError};
