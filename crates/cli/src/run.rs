//! The run pipeline: compile, validate, bracket, iterate, classify.

use std::{fmt, num::NonZeroUsize};

use bisecta_core::Guarded;
use bisecta_expr::{Compiler, MevalCompiler, ParseError};
use bisecta_solvers::equation::bisection::{
    self, BracketError, Config, Endpoints, Error, Solution, Status, Trace,
};
use tracing::{debug, info};

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Formula text, e.g. `x^2 - 2`.
    pub expression: String,
    /// Name of the variable the formula is written in.
    pub var: String,
    /// Interval bounds `[a, b]`, used in the order given.
    pub bounds: [f64; 2],
    /// Stop once the half-width drops below this.
    pub tol: f64,
    /// Decimals shown in the iteration table.
    pub decimals: NonZeroUsize,
    /// Maximum number of bisection passes.
    pub max_iters: usize,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A midpoint evaluated to exactly zero.
    ExactRoot { x: f64 },

    /// The half-width fell below the tolerance.
    ApproximateRoot { x: f64, error: f64 },

    /// The iteration limit was reached first.
    MaxIterationsReached { x: f64 },

    /// The function was undefined at the midpoint of pass `iter`.
    UndefinedEncountered { x: f64, iter: usize },

    /// The interval could not be used as a bracket.
    InvalidBracket { reason: BracketError },

    /// The run parameters were rejected before any evaluation.
    EvaluationFailure { reason: String },
}

impl Outcome {
    /// Returns true if the run produced an estimate of the root.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::ExactRoot { .. } | Self::ApproximateRoot { .. } | Self::MaxIterationsReached { .. }
        )
    }

    /// Returns the root estimate, if any.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            Self::ExactRoot { x }
            | Self::ApproximateRoot { x, .. }
            | Self::MaxIterationsReached { x } => Some(*x),
            _ => None,
        }
    }

    /// Returns a short machine-readable name for the outcome.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ExactRoot { .. } => "exact_root",
            Self::ApproximateRoot { .. } => "approximate_root",
            Self::MaxIterationsReached { .. } => "max_iterations_reached",
            Self::UndefinedEncountered { .. } => "undefined_encountered",
            Self::InvalidBracket { .. } => "invalid_bracket",
            Self::EvaluationFailure { .. } => "evaluation_failure",
        }
    }

    fn from_solution(solution: &Solution) -> Self {
        let x = solution.x;
        match solution.status {
            Status::ExactRoot => Self::ExactRoot { x },
            Status::Converged => Self::ApproximateRoot {
                x,
                error: solution.half_width,
            },
            Status::MaxIters => Self::MaxIterationsReached { x },
            Status::Undefined => Self::UndefinedEncountered {
                x,
                iter: solution.iters,
            },
        }
    }
}

/// The result of one run.
///
/// The trace is always present. It is empty when the run failed before the
/// first pass, and it stops short of the failing pass when an undefined value
/// ended the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Compiled formula, as it was parsed.
    pub function: String,
    pub outcome: Outcome,
    /// Bounds and their values, once the bracket was accepted.
    pub endpoints: Option<Endpoints>,
    pub trace: Trace,
}

impl Report {
    fn rejected(function: String, outcome: Outcome) -> Self {
        Self {
            function,
            outcome,
            endpoints: None,
            trace: Trace::default(),
        }
    }
}

/// Runs a request with the default expression compiler.
///
/// # Errors
///
/// Returns a [`ParseError`] if the expression cannot be compiled. Every other
/// failure is reported through [`Report::outcome`].
pub fn run(request: &Request) -> Result<Report, ParseError> {
    run_with(&MevalCompiler, request)
}

/// Runs a request with the given compiler.
///
/// # Errors
///
/// Returns a [`ParseError`] if the expression cannot be compiled.
pub fn run_with<C>(compiler: &C, request: &Request) -> Result<Report, ParseError>
where
    C: Compiler,
    C::Output: fmt::Display,
{
    let model = compiler.compile(&request.expression, &request.var)?;
    let function = model.to_string();

    let config = match Config::new(request.max_iters, request.tol) {
        Ok(config) => config,
        Err(err) => {
            debug!(%err, "rejected run parameters");
            let outcome = Outcome::EvaluationFailure {
                reason: err.to_string(),
            };
            return Ok(Report::rejected(function, outcome));
        }
    };

    let f = Guarded::new(model);
    let report = match bisection::solve_unobserved(&f, request.bounds, &config) {
        Ok(solution) => Report {
            function,
            outcome: Outcome::from_solution(&solution),
            endpoints: Some(solution.endpoints),
            trace: solution.trace,
        },
        Err(Error::InvalidBracket(reason)) => {
            Report::rejected(function, Outcome::InvalidBracket { reason })
        }
    };

    info!(outcome = report.outcome.kind(), iters = report.trace.len(), "run complete");
    Ok(report)
}
