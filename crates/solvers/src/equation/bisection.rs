//! Bisection root finding for a single-variable function.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` where `f(a)` and `f(b)` do not share a
//! strict sign, each pass computes the half-width `c = (b - a) / 2` and the
//! midpoint `x = a + c`, evaluates `f(x)`, and records the pass. The run stops
//! when `f(x)` is exactly zero, when `c` drops below the tolerance, or when the
//! iteration limit is reached. Otherwise `f(a)` is evaluated again and the
//! bracket keeps the half whose endpoints have strictly opposite signs,
//! falling back to the right half.
//!
//! If `f(x)` is undefined the run stops immediately and that pass is not
//! recorded, so the trace holds only passes with a finite value.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation:
//!
//! - [`Event::Iterated`]: the record that was just appended to the trace
//! - [`Event::Undefined`]: the midpoint that ended the run
//!
//! Observers cannot alter the run; there is no early stop.

mod bracket;
mod config;
mod error;
mod event;
mod record;
mod solution;
mod table;


pub use bracket::{Bracket, BracketError, Endpoints, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::{IterationRecord, Trace};
pub use solution::{Solution, Status};
pub use table::{HEADERS, Table, round};

use bisecta_core::{Guarded, Model, Observer, Real};
use tracing::{debug, info};

/// Finds a root of `f` inside `bounds` using the bisection method.
///
/// The observer receives an [`Event`] for each midpoint evaluation.
/// See the [module docs](self) for the stopping and selection rules.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the bounds are non-finite or equal,
/// if `f` is undefined at either bound, or if `f` has the same strict sign at
/// both bounds. No iteration is attempted in that case.
pub fn solve<M, Obs>(
    f: &Guarded<M>,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64>,
    M::Output: Real,
    Obs: for<'a> Observer<Event<'a>>,
{
    let (mut bracket, endpoints) = Bracket::new(bounds, f)?;
    let mut trace = Trace::default();

    let mut iter = 0;
    loop {
        iter += 1;

        let half_width = bracket.half_width();
        let x = bracket.midpoint();

        let Some(value) = f.evaluate(x) else {
            observer.observe(&Event::Undefined { iter, x });
            info!(iter, x, "undefined value at midpoint");
            return Ok(Solution {
                status: Status::Undefined,
                x,
                half_width,
                iters: iter,
                endpoints,
                trace,
            });
        };

        let record = IterationRecord {
            iter,
            a: bracket.left(),
            b: bracket.right(),
            half_width,
            x,
            value,
        };
        debug!(iter, a = record.a, b = record.b, half_width, x, value, "bisection pass");
        observer.observe(&Event::Iterated { record: &record });
        trace.push(record);

        #[allow(clippy::float_cmp)]
        let status = if value == 0.0 {
            Some(Status::ExactRoot)
        } else if half_width < config.tol() {
            Some(Status::Converged)
        } else if iter >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            info!(?status, iter, x, half_width, "bisection finished");
            return Ok(Solution {
                status,
                x,
                half_width,
                iters: iter,
                endpoints,
                trace,
            });
        }

        bracket.shrink(x, value, f);
    }
}

/// Finds a root of `f` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the bracket is invalid.
pub fn solve_unobserved<M>(
    f: &Guarded<M>,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = f64>,
    M::Output: Real,
{
    solve(f, bounds, config, ())
}
