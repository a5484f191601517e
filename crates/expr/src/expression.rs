use std::fmt;

use bisecta_core::Model;
use meval::{Context, Expr};

use crate::EvalError;

/// A compiled expression of one variable.
///
/// Built once by a [`Compiler`](crate::Compiler) and evaluated any number of
/// times without reparsing. Evaluation has no side effects and does not
/// depend on previous calls.
pub struct Expression {
    text: String,
    var: String,
    expr: Expr,
    context: Context<'static>,
}

impl Expression {
    /// Assembles an expression whose names were already checked against `context`.
    pub(crate) fn new(text: String, var: String, expr: Expr, context: Context<'static>) -> Self {
        Self {
            text,
            var,
            expr,
            context,
        }
    }

    /// Returns the normalized source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the name of the free variable.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Model for Expression {
    type Input = f64;
    type Output = f64;
    type Error = EvalError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        self.expr
            .eval_with_context(((self.var.as_str(), *x), &self.context))
            .map_err(|err| EvalError(err.to_string()))
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("text", &self.text)
            .field("var", &self.var)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
