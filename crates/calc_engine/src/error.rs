use calc_parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Exponent too large: {0}")]
    ExponentTooLarge(String),
    #[error("Result is not a finite number")]
    NonFinite,
}
