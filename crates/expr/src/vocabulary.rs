//! Names available inside expressions.
//!
//! The base vocabulary comes from [`meval`]'s built-in context:
//!
//! - constants `pi` and `e`
//! - `sqrt exp ln abs sin cos tan asin acos atan sinh cosh tanh asinh acosh
//!   atanh floor ceil round signum`
//! - two-argument `atan2`, and `max`/`min` over one or more arguments
//!
//! On top of that, [`context`] adds the spellings people bring over from
//! computer algebra systems and calculators, listed in [`EXTRA_CONSTANTS`] and [`EXTRA_FUNCTIONS`].

use std::f64::consts;

use meval::Context;

/// Constants added on top of the built-in ones.
pub const EXTRA_CONSTANTS: &[&str] = &["E"];

/// Single-argument functions added on top of the built-in ones.
///
/// `log` is the natural logarithm.
pub const EXTRA_FUNCTIONS: &[&str] = &["log", "log10", "log2", "cbrt", "sec", "csc", "cot"];

/// Returns the evaluation context shared by every compiled expression.
#[must_use]
pub fn context() -> Context<'static> {
    let mut ctx = Context::new();
    ctx.var("E", consts::E)
        .func("log", f64::ln)
        .func("log10", f64::log10)
        .func("log2", f64::log2)
        .func("cbrt", f64::cbrt)
        .func("sec", |x: f64| x.cos().recip())
        .func("csc", |x: f64| x.sin().recip())
        .func("cot", |x: f64| x.tan().recip());
    ctx
}
