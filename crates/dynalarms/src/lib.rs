//! dynalarms_cli - Command-line shell around `dynalarms_core`.
//!
//! Reads a service document, runs the alarm pipeline on it and prints or
//! writes the result.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
