//! Run settings, loaded from TOML and overridden by the command line.

use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{cli::Cli, error::Result, run::Request};

/// Function solved when neither a settings file nor the command line gives one.
pub const SAMPLE_FUNCTION: &str =
    "( sqrt(3*x**3 + 2*x**2 + 4) * (x - 3) ) / ( (x**2 + 6*x + 7)**1 * (x**2 + 7)**2 )";

// Known-good value, checked at compile time.
const DEFAULT_DECIMALS: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Settings for a single run.
///
/// Every field has a default, so a settings file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Formula to solve
    pub function: String,

    /// Variable the formula is written in
    pub var: String,

    /// Lower bound
    pub a: f64,

    /// Upper bound
    pub b: f64,

    /// Tolerance on the half-width
    pub tol: f64,

    /// Decimals shown in the iteration table
    pub decimals: NonZeroUsize,

    /// Iteration limit
    pub max_iter: usize,

    /// Default output format
    pub format: OutputFormat,

    /// Enable colored output
    pub color: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Messages and a table
    #[default]
    Table,
    /// JSON format
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            function: SAMPLE_FUNCTION.to_string(),
            var: "x".to_string(),
            a: 0.0,
            b: 5.0,
            tol: 0.01,
            decimals: DEFAULT_DECIMALS,
            max_iter: 100,
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid settings TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = toml::from_str(&contents)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Applies every value given on the command line.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(expression) = &cli.expression {
            self.function.clone_from(expression);
        }
        if let Some(var) = &cli.var {
            self.var.clone_from(var);
        }
        if let Some(a) = cli.a {
            self.a = a;
        }
        if let Some(b) = cli.b {
            self.b = b;
        }
        if let Some(tol) = cli.tol {
            self.tol = tol;
        }
        if let Some(decimals) = cli.decimals {
            self.decimals = decimals;
        }
        if let Some(max_iter) = cli.max_iter {
            self.max_iter = max_iter;
        }
        if let Some(format) = cli.format {
            self.format = format.into();
        }
        if cli.no_color {
            self.color = false;
        }
    }

    /// Builds the run request these settings describe.
    #[must_use]
    pub fn request(&self) -> Request {
        Request {
            expression: self.function.clone(),
            var: self.var.clone(),
            bounds: [self.a, self.b],
            tol: self.tol,
            decimals: self.decimals,
            max_iters: self.max_iter,
        }
    }
}
