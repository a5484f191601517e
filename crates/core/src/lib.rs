//! Core traits and types for the Bisecta root finder.
//!
//! This crate defines the shared abstractions that the expression compiler and
//! the solvers build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Observer`]: receives solver events as they happen
//! - [`Real`]: model outputs that may or may not be a usable real number
//! - [`Guarded`]: wraps a scalar model so every failure collapses to `None`

mod guard;
mod model;
mod observer;
mod real;

pub use guard::Guarded;
pub use model::Model;
pub use observer::Observer;
pub use real::Real;
