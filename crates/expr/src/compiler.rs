use bisecta_core::Model;
use meval::Expr;
use tracing::debug;

use crate::{Expression, ParseError, vocabulary};

/// Compiles formula text into a model of one variable.
///
/// Implementations must fail with a [`ParseError`] on malformed input or
/// unknown names, and must be deterministic for identical input.
pub trait Compiler {
    type Output: Model<Input = f64, Output = f64>;

    /// Compiles `text` as a function of the variable named `var`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is empty, malformed, or refers to
    /// a name that is neither `var` nor part of the vocabulary.
    fn compile(&self, text: &str, var: &str) -> Result<Self::Output, ParseError>;
}

/// A [`Compiler`] backed by the `meval` expression parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct MevalCompiler;

impl Compiler for MevalCompiler {
    type Output = Expression;

    fn compile(&self, text: &str, var: &str) -> Result<Expression, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        if !is_identifier(var) {
            return Err(ParseError::InvalidVariable(var.to_string()));
        }

        let text = normalize(text);
        let expr: Expr = text.parse()?;
        let context = vocabulary::context();

        // Binding walks every name in the expression against the context,
        // so unknown symbols and bad argument counts fail here, not mid-run.
        expr.clone().bind_with_context(&context, var)?;

        debug!(expression = %text, var, "compiled expression");
        Ok(Expression::new(text, var.to_string(), expr, context))
    }
}

/// Compiles `text` with the default [`MevalCompiler`].
///
/// # Errors
///
/// See [`Compiler::compile`].
pub fn compile(text: &str, var: &str) -> Result<Expression, ParseError> {
    MevalCompiler.compile(text, var)
}

/// Rewrites `**` exponentiation into the `^` the parser understands.
fn normalize(text: &str) -> String {
    text.replace("**", "^")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(text: &str, x: f64) -> f64 {
        compile(text, "x")
            .expect("should compile")
            .call(&x)
            .expect("should evaluate")
    }

    #[test]
    fn evaluates_polynomial() {
        assert_relative_eq!(eval("x^2 - 2", 3.0), 7.0);
        assert_relative_eq!(eval("2 + 3 * x", 2.0), 8.0);
        assert_relative_eq!(eval("(2 + 3) * x", 2.0), 10.0);
    }

    #[test]
    fn accepts_double_star_power() {
        assert_relative_eq!(eval("x**2 - 2", 3.0), 7.0);
        assert_eq!(compile("x**3", "x").unwrap().text(), "x^3");
    }

    #[test]
    fn power_is_right_associative() {
        assert_relative_eq!(eval("x^3^2", 2.0), 512.0);
    }

    #[test]
    fn evaluates_transcendental_functions() {
        assert_relative_eq!(eval("sin(x)^2 + cos(x)^2", 0.7), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("exp(log(x))", 5.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sqrt(x) + cbrt(x)", 64.0), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn evaluates_default_sample_function() {
        let text = "( sqrt(3*x**3 + 2*x**2 + 4) * (x - 3) ) / ( (x**2 + 6*x + 7)**1 * (x**2 + 7)**2 )";
        assert_relative_eq!(eval(text, 3.0), 0.0);
        assert!(eval(text, 0.0) < 0.0);
        assert!(eval(text, 5.0) > 0.0);
    }

    #[test]
    fn compiled_expression_is_reusable() {
        let f = compile("x^2", "x").unwrap();
        for i in 0..100 {
            let x = f64::from(i);
            assert_relative_eq!(f.call(&x).unwrap(), x * x);
        }
    }

    #[test]
    fn supports_other_variable_names() {
        let f = compile("t^2 - 4", "t").unwrap();
        assert_relative_eq!(f.call(&2.0).unwrap(), 0.0);
        assert_eq!(f.var(), "t");
    }

    #[test]
    fn domain_errors_are_not_eval_errors() {
        let f = compile("1/x + ln(x)", "x").unwrap();
        assert!(f.call(&0.0).unwrap().is_infinite() || f.call(&0.0).unwrap().is_nan());
        assert!(f.call(&-1.0).unwrap().is_nan());
    }

    #[test]
    fn rejects_empty_expression() {
        assert_eq!(compile("", "x").unwrap_err(), ParseError::Empty);
        assert_eq!(compile("   ", "x").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn rejects_unknown_symbol() {
        let err = compile("x + y", "x").unwrap_err();
        assert_eq!(err, ParseError::UnknownSymbol("y".to_string()));
    }

    #[test]
    fn rejects_unknown_function() {
        let err = compile("foo(x)", "x").unwrap_err();
        assert!(matches!(err, ParseError::Function { ref name, .. } if name == "foo"));
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = compile("sin(x, 2)", "x").unwrap_err();
        assert!(matches!(err, ParseError::Function { ref name, .. } if name == "sin"));
    }

    #[test]
    fn rejects_malformed_expression() {
        assert!(matches!(compile("x +", "x"), Err(ParseError::Syntax(_))));
        assert!(matches!(compile("(x - 1", "x"), Err(ParseError::Syntax(_))));
        assert!(matches!(compile("x $ 2", "x"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn rejects_invalid_variable_name() {
        for var in ["", "1x", "x y", "x-1"] {
            assert_eq!(
                compile("x", var).unwrap_err(),
                ParseError::InvalidVariable(var.to_string())
            );
        }
    }

    #[test]
    fn is_deterministic() {
        let a = compile("sin(x) / x", "x").unwrap();
        let b = compile("sin(x) / x", "x").unwrap();
        assert_eq!(a.text(), b.text());
        assert_relative_eq!(a.call(&1.3).unwrap(), b.call(&1.3).unwrap());
    }
}
