//! Command-line argument parsing.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Parser};

use crate::settings::OutputFormat;

/// Bisecta - find a root of f(x) on [a, b] with the bisection method.
#[derive(Debug, Parser)]
#[command(name = "bisecta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Function to solve, e.g. "x**2 - 2"
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Lower bound of the interval
    #[arg(short = 'a', long = "from", allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Upper bound of the interval
    #[arg(short = 'b', long = "to", allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Stop once the error (b-a)/2 is below this
    #[arg(short, long)]
    pub tol: Option<f64>,

    /// Decimals shown in the iteration table
    #[arg(short, long)]
    pub decimals: Option<NonZeroUsize>,

    /// Maximum number of iterations
    #[arg(short = 'n', long)]
    pub max_iter: Option<usize>,

    /// Variable name used in the function
    #[arg(long)]
    pub var: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Settings file path
    #[arg(short, long, env = "BISECTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Messages and a table (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}
