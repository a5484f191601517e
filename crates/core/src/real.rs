use num_complex::Complex;

/// A model output that may or may not be a real number.
///
/// The guarded evaluator only accepts outputs that reduce to a single `f64`.
/// Complex outputs count as real only when their imaginary part is exactly zero.
pub trait Real {
    /// Returns the real value, or `None` if the value is not real.
    fn real(&self) -> Option<f64>;
}

impl Real for f64 {
    fn real(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Real for f32 {
    fn real(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Real for Complex<f64> {
    fn real(&self) -> Option<f64> {
        #[allow(clippy::float_cmp)]
        if self.im == 0.0 { Some(self.re) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn floats_are_real() {
        assert_relative_eq!(2.5_f64.real().unwrap(), 2.5);
        assert_relative_eq!(0.5_f32.real().unwrap(), 0.5);
    }

    #[test]
    fn complex_with_zero_imaginary_part_is_real() {
        let value = Complex::new(3.0, 0.0);
        assert_relative_eq!(value.real().unwrap(), 3.0);
    }

    #[test]
    fn complex_with_imaginary_part_is_not_real() {
        assert!(Complex::new(0.0, 1.0).real().is_none());
        assert!(Complex::new(1.0, f64::NAN).real().is_none());
    }
}
