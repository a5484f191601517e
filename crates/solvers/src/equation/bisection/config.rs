use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least one")]
    MaxIters,

    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 0.01,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A zero `tol` is allowed; the solver then stops only on an exact root,
    /// an undefined value, or the iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tol` is negative or
    /// non-finite.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the half-width of the bracket.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}
