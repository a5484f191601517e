//! Expression compiler for the Bisecta root finder.
//!
//! Turns formula text such as `sqrt(3*x**3 + 4) * (x - 3)` into an
//! [`Expression`], a reusable [`Model`] of one variable.
//!
//! Compilation is pluggable through the [`Compiler`] trait. The shipped
//! implementation, [`MevalCompiler`], parses with [`meval`] and binds a math
//! context with the usual trigonometric, exponential, logarithmic, power and
//! root functions. See [`vocabulary`] for the full list.
//!
//! [`Model`]: bisecta_core::Model

mod compiler;
mod error;
mod expression;
pub mod vocabulary;

pub use compiler::{Compiler, MevalCompiler, compile};
pub use error::{EvalError, ParseError};
pub use expression::Expression;
