//! Bisecta CLI - find a root of a function on an interval by bisection.
//!
//! The library half of the binary: the [`run`] pipeline that turns a
//! [`Request`] into a [`Report`], plus settings, argument parsing, and output
//! formatting.

pub mod cli;
pub mod error;
pub mod output;
pub mod run;
pub mod settings;

pub use cli::{Cli, CliFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
pub use run::{Outcome, Report, Request, run, run_with};
pub use settings::{OutputFormat, SAMPLE_FUNCTION, Settings};
