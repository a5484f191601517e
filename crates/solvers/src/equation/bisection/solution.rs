use super::{Endpoints, Trace};

/// How a bisection run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The midpoint evaluated to exactly zero.
    ExactRoot,

    /// The half-width dropped below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The function was undefined at the midpoint.
    Undefined,
}

/// The result of a bisection run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final pass.
    pub x: f64,

    /// Half-width of the final pass, the error bound on `x`.
    pub half_width: f64,

    /// Iteration count when the solver finished, including an undefined pass.
    pub iters: usize,

    /// The validated starting bracket.
    pub endpoints: Endpoints,

    /// Records of every completed pass.
    pub trace: Trace,
}
