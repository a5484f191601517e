//! Numerical solvers for the Bisecta root finder.
//!
//! # Modules
//!
//! - [`equation`]: finding a root of a scalar function on a bracket
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for solutions, traces, and tables so
//!   front ends can emit them as JSON.

pub mod equation;
