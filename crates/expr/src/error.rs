use thiserror::Error;

/// Errors that can occur when compiling an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid variable name `{0}`")]
    InvalidVariable(String),

    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),

    #[error("function `{name}`: {reason}")]
    Function { name: String, reason: String },

    #[error("syntax error: {0}")]
    Syntax(String),
}

impl From<meval::Error> for ParseError {
    fn from(err: meval::Error) -> Self {
        match err {
            meval::Error::UnknownVariable(name) => Self::UnknownSymbol(name),
            meval::Error::Function(name, reason) => Self::Function {
                name,
                reason: reason.to_string(),
            },
            other => Self::Syntax(other.to_string()),
        }
    }
}

/// Error returned when a compiled expression cannot be evaluated.
///
/// Domain problems such as `ln(-1)` or `1/0` are not errors here; they yield
/// NaN or an infinity and are left to the guarded evaluator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("evaluation failed: {0}")]
pub struct EvalError(pub String);
