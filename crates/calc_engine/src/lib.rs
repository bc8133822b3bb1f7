//! Numeric evaluation backend for selcalc.
//!
//! The resolver only needs "evaluate this arithmetic string". [`Evaluator`] is
//! that seam; [`RationalEvaluator`] is the default implementation, working over
//! exact rationals and falling back to `f64` only for fractional exponents.

pub mod error;
pub mod eval;
pub mod format;
pub mod options;
pub mod pow;
pub mod value;

pub use error::EvalError;
pub use eval::{Evaluator, RationalEvaluator};
pub use format::strip_trailing_zeros;
pub use options::{EvalOptions, MAX_FRACTION_DIGITS};
pub use value::Value;
