use tracing::trace;

use crate::{Model, Real};

/// Why a guarded evaluation produced no value.
///
/// Only used for diagnostics: callers of [`Guarded::evaluate`] see `None`
/// regardless of the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Undefined {
    /// The model returned an error.
    Failed,
    /// The output had a nonzero imaginary part.
    Complex,
    /// The output was NaN.
    NotANumber,
    /// The output was positive or negative infinity.
    Infinite,
}

/// A scalar model whose failures all collapse to a single "undefined" result.
///
/// `Guarded` is the one place where model errors, complex results, NaN and
/// infinities are normalized. Everything downstream compares against `None`
/// and never inspects the underlying error type.
#[derive(Debug, Clone)]
pub struct Guarded<M> {
    model: M,
}

impl<M> Guarded<M>
where
    M: Model<Input = f64>,
    M::Output: Real,
{
    /// Wraps a model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Evaluates the model at `x`.
    ///
    /// Returns `Some` with a finite real value, or `None` if the model failed
    /// or its output was complex, NaN, or infinite.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        match self.check(x) {
            Ok(value) => Some(value),
            Err(reason) => {
                trace!(x, ?reason, "value is undefined");
                None
            }
        }
    }

    /// Returns the wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    fn check(&self, x: f64) -> Result<f64, Undefined> {
        let output = self.model.call(&x).map_err(|error| {
            trace!(x, %error, "model call failed");
            Undefined::Failed
        })?;

        let value = output.real().ok_or(Undefined::Complex)?;
        if value.is_nan() {
            Err(Undefined::NotANumber)
        } else if value.is_infinite() {
            Err(Undefined::Infinite)
        } else {
            Ok(value)
        }
    }
}
