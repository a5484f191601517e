use thiserror::Error;

use super::bracket::BracketError;

/// Errors that can occur before bisection starts iterating.
///
/// A [`Config`](super::Config) is validated when it is built, so the only
/// failure left at solve time is the bracket.
///
/// Once the bracket is validated the solver always returns a
/// [`Solution`](super::Solution); undefined midpoints are a status, not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),
}
