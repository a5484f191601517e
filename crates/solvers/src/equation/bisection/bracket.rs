use std::ops::Mul;

use bisecta_core::{Guarded, Model, Real};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// The function is undefined at one or both endpoints.
    #[error(
        "endpoint undefined: f({left}) = {}, f({right}) = {}",
        show(.left_value),
        show(.right_value)
    )]
    EndpointUndefined {
        left: f64,
        right: f64,
        left_value: Option<f64>,
        right_value: Option<f64>,
    },

    /// The function has the same strict sign at both endpoints.
    #[error("same sign: f({left}) = {left_value}, f({right}) = {right_value}")]
    SameSign {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

#[allow(clippy::ref_option)]
fn show(value: &Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

/// Endpoints of a validated bracket and the function values there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Endpoints {
    pub left: f64,
    pub right: f64,
    pub left_value: f64,
    pub right_value: f64,
}

/// Current search interval of a bisection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Validates `bounds` against `f` and returns the starting bracket.
    ///
    /// Bounds are kept in the order given. With `a > b` the half-width is
    /// negative and the search runs as supplied. A zero at an endpoint is
    /// accepted and does not end the search early.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] if the bounds are non-finite or equal, if
    /// `f` is undefined at either endpoint, or if `f` has the same strict sign
    /// at both endpoints.
    pub fn new<M>(bounds: [f64; 2], f: &Guarded<M>) -> Result<(Self, Endpoints), BracketError>
    where
        M: Model<Input = f64>,
        M::Output: Real,
    {
        let Bounds { left, right } = Bounds::new(bounds)?;

        let (left_value, right_value) = match (f.evaluate(left), f.evaluate(right)) {
            (Some(l), Some(r)) => (l, r),
            (left_value, right_value) => {
                warn!(left, right, ?left_value, ?right_value, "endpoint undefined");
                return Err(BracketError::EndpointUndefined {
                    left,
                    right,
                    left_value,
                    right_value,
                });
            }
        };

        if Sign::of(left_value) * Sign::of(right_value) == Sign::Positive {
            warn!(left, right, left_value, right_value, "endpoints have the same sign");
            return Err(BracketError::SameSign {
                left,
                right,
                left_value,
                right_value,
            });
        }

        let endpoints = Endpoints {
            left,
            right,
            left_value,
            right_value,
        };
        Ok((Self { left, right }, endpoints))
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the left bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns half the bracket width, which is also the error estimate.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (self.right - self.left) / 2.0
    }

    /// Returns the midpoint, computed as `left + half_width`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.left + self.half_width()
    }

    /// Moves one bound to the midpoint `x`, where `f(x) = value`.
    ///
    /// `f(left)` is evaluated afresh. The right half is kept unless
    /// `f(left)` and `value` have strictly opposite signs, so a zero or
    /// undefined `f(left)` also moves the left bound.
    pub(super) fn shrink<M>(&mut self, x: f64, value: f64, f: &Guarded<M>)
    where
        M: Model<Input = f64>,
        M::Output: Real,
    {
        let left_sign = f.evaluate(self.left).map(Sign::of);
        if left_sign.is_some_and(|sign| sign * Sign::of(value) == Sign::Negative) {
            self.right = x;
        } else {
            self.left = x;
        }
    }
}

/// The sign of a function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of a value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

/// Sign of a product, without computing the product itself.
impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Finite, distinct bounds for a bisection bracket, in the order given.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates the bracket endpoints.
    fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        Ok(Self { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// f(x) = x² - 2.
    struct Quadratic;

    impl Model for Quadratic {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x * x - 2.0)
        }
    }

    /// f(x) = ln(x).
    struct NaturalLog;

    impl Model for NaturalLog {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x.ln())
        }
    }

    /// f(x) = x.
    struct Identity;

    impl Model for Identity {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(*x)
        }
    }

    #[test]
    fn bounds_keep_given_order() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bounds.left, 3.0);
        assert_relative_eq!(bounds.right, 1.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn accepts_sign_change() {
        let f = Guarded::new(Quadratic);
        let (bracket, endpoints) = Bracket::new([0.0, 2.0], &f).expect("valid bracket");

        assert_eq!(bracket.as_array(), [0.0, 2.0]);
        assert_relative_eq!(endpoints.left_value, -2.0);
        assert_relative_eq!(endpoints.right_value, 2.0);
    }

    #[test]
    fn rejects_same_sign() {
        let f = Guarded::new(Quadratic);
        let err = Bracket::new([2.0, 3.0], &f).unwrap_err();

        assert_eq!(
            err,
            BracketError::SameSign {
                left: 2.0,
                right: 3.0,
                left_value: 2.0,
                right_value: 7.0,
            }
        );
        assert!(err.to_string().starts_with("same sign"));
    }

    #[test]
    fn rejects_undefined_endpoint() {
        let f = Guarded::new(NaturalLog);
        let err = Bracket::new([-1.0, 2.0], &f).unwrap_err();

        assert!(matches!(
            err,
            BracketError::EndpointUndefined {
                left_value: None,
                right_value: Some(_),
                ..
            }
        ));
        assert!(err.to_string().starts_with("endpoint undefined"));
        assert!(err.to_string().contains("f(-1) = undefined"));
    }

    #[test]
    fn accepts_zero_at_endpoint() {
        let f = Guarded::new(Identity);
        let (bracket, endpoints) = Bracket::new([0.0, 1.0], &f).expect("zero product is allowed");

        assert_eq!(bracket.as_array(), [0.0, 1.0]);
        assert_relative_eq!(endpoints.left_value, 0.0);
    }

    #[test]
    fn midpoint_uses_half_width() {
        let f = Guarded::new(Quadratic);
        let (bracket, _) = Bracket::new([0.0, 2.0], &f).unwrap();

        assert_relative_eq!(bracket.half_width(), 1.0);
        assert_relative_eq!(bracket.midpoint(), 1.0);
    }

    #[test]
    fn reversed_bracket_has_negative_half_width() {
        let f = Guarded::new(Quadratic);
        let (bracket, endpoints) = Bracket::new([2.0, 0.0], &f).expect("valid bracket");

        assert_eq!(bracket.as_array(), [2.0, 0.0]);
        assert_relative_eq!(endpoints.left_value, 2.0);
        assert_relative_eq!(bracket.half_width(), -1.0);
        assert_relative_eq!(bracket.midpoint(), 1.0);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let f = Guarded::new(Quadratic);
        let (mut bracket, _) = Bracket::new([0.0, 2.0], &f).unwrap();

        // f(1) = -1 has the same sign as f(0), so the root is to the right.
        bracket.shrink(1.0, -1.0, &f);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        // f(1.5) = 0.25 is opposite to f(1), so the root is to the left.
        bracket.shrink(1.5, 0.25, &f);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
    }

    #[test]
    fn shrink_keeps_right_half_on_zero_product() {
        let f = Guarded::new(Identity);
        let (mut bracket, _) = Bracket::new([0.0, 1.0], &f).unwrap();

        // f(0) = 0, so the product is zero and the left bound moves.
        bracket.shrink(0.5, 0.5, &f);
        assert_eq!(bracket.as_array(), [0.5, 1.0]);
    }

    #[test]
    fn sign_products() {
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Zero * Sign::Negative, Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
        assert_eq!(Sign::of(1e-300), Sign::Positive);
    }

    #[test]
    fn sign_product_survives_underflow() {
        let (a, b) = (-3e-201, 7e-201);

        assert_eq!(a * b, 0.0);
        assert_eq!(Sign::of(a) * Sign::of(b), Sign::Negative);
    }
}
