use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::ops::Neg;

use crate::format::{format_approx, format_exact};
use crate::pow::pow_exact;
use crate::{EvalError, EvalOptions};

/// Result of an arithmetic evaluation.
///
/// Values stay exact until a fractional exponent forces a floating point
/// approximation; from then on the computation is approximate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Exact(BigRational),
    Approx(f64),
}

impl Value {
    pub fn is_exact(&self) -> bool {
        matches!(self, Value::Exact(_))
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Exact(q) => q.to_f64(),
            Value::Approx(x) => Some(*x),
        }
    }

    /// Canonical decimal rendering, before trailing-zero stripping.
    ///
    /// Exact values with a terminating expansion of at most
    /// `max_fraction_digits` digits print exactly; longer expansions are
    /// rounded half away from zero to that many digits. Approximate values
    /// are rounded the same way, starting from their shortest `f64` digits.
    pub fn to_decimal_string(&self, max_fraction_digits: usize) -> String {
        match self {
            Value::Exact(q) => format_exact(q, max_fraction_digits),
            Value::Approx(x) => format_approx(*x, max_fraction_digits),
        }
    }

    pub fn checked_add(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Exact(a), Value::Exact(b)) => Ok(Value::Exact(a + b)),
            (a, b) => approx(a, b, |x, y| x + y),
        }
    }

    pub fn checked_sub(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Exact(a), Value::Exact(b)) => Ok(Value::Exact(a - b)),
            (a, b) => approx(a, b, |x, y| x - y),
        }
    }

    pub fn checked_mul(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Exact(a), Value::Exact(b)) => Ok(Value::Exact(a * b)),
            (a, b) => approx(a, b, |x, y| x * y),
        }
    }

    pub fn checked_div(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Exact(_), Value::Exact(b)) if b.is_zero() => Err(EvalError::DivisionByZero),
            (Value::Exact(a), Value::Exact(b)) => Ok(Value::Exact(a / b)),
            (a, b) => approx(a, b, |x, y| x / y),
        }
    }

    pub fn checked_pow(self, rhs: Value, options: &EvalOptions) -> Result<Value, EvalError> {
        if let (Value::Exact(base), Value::Exact(exp)) = (&self, &rhs) {
            if let Some(result) = pow_exact(base, exp, options)? {
                return Ok(Value::Exact(result));
            }
        }
        approx(self, rhs, f64::powf)
    }
}

fn approx(lhs: Value, rhs: Value, op: impl FnOnce(f64, f64) -> f64) -> Result<Value, EvalError> {
    let x = lhs.to_f64().ok_or(EvalError::NonFinite)?;
    let y = rhs.to_f64().ok_or(EvalError::NonFinite)?;
    let result = op(x, y);
    if result.is_finite() {
        Ok(Value::Approx(result))
    } else {
        Err(EvalError::NonFinite)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Exact(q) => Value::Exact(-q),
            Value::Approx(x) => Value::Approx(-x),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Exact(q) if q.is_integer() => write!(f, "{}", q.numer()),
            Value::Exact(q) => write!(f, "{}/{}", q.numer(), q.denom()),
            Value::Approx(x) => write!(f, "~{}", x),
        }
    }
}
