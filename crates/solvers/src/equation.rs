//! Solvers for scalar equations, finding `x` such that `f(x) = 0`.
//!
//! Solvers in this module work on a [`Guarded`] model, so every evaluation
//! either yields a finite real value or is undefined. They never see the
//! model's own error type.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a sign-changing bracket
//!
//! [`Guarded`]: bisecta_core::Guarded

pub mod bisection;
