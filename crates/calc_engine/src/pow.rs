//! Exact rational powers.
//!
//! # Contract
//!
//! - **Integral exponents only**: fractional exponents return `Ok(None)` and
//!   the caller falls back to floating point
//! - **Edge cases**: `a^0 = 1` (including `0^0`), `0^(-n)` is a division by zero,
//!   `1^n = 1` and `(-1)^n = ±1` for any `n`
//! - **Bounded**: `max_exponent` and `max_result_bits` keep materialization cheap

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{EvalError, EvalOptions};

/// Try to evaluate `base^exp` exactly.
pub fn pow_exact(
    base: &BigRational,
    exp: &BigRational,
    options: &EvalOptions,
) -> Result<Option<BigRational>, EvalError> {
    if !exp.is_integer() {
        return Ok(None);
    }
    let exp_int = exp.to_integer();

    if exp_int.is_zero() {
        return Ok(Some(BigRational::one()));
    }
    if base.is_zero() {
        return if exp_int.is_negative() {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(Some(BigRational::zero()))
        };
    }
    if base.is_one() {
        return Ok(Some(BigRational::one()));
    }
    if (-base).is_one() {
        let odd = (&exp_int % BigInt::from(2)) != BigInt::zero();
        return Ok(Some(if odd { base.clone() } else { BigRational::one() }));
    }

    let abs_e = exp_int
        .abs()
        .to_u32()
        .filter(|e| *e <= options.max_exponent)
        .ok_or_else(|| EvalError::ExponentTooLarge(exp_int.to_string()))?;

    let base_bits = base.numer().bits().max(base.denom().bits());
    if base_bits.saturating_mul(u64::from(abs_e)) > options.max_result_bits {
        return Err(EvalError::ExponentTooLarge(exp_int.to_string()));
    }

    let mut result = pow_rational(base, abs_e);
    if exp_int.is_negative() {
        // base != 0 already guaranteed
        result = result.recip();
    }
    Ok(Some(result))
}

/// base^exp by square-and-multiply.
fn pow_rational(base: &BigRational, exp: u32) -> BigRational {
    let mut result = BigRational::one();
    let mut b = base.clone();
    let mut e = exp;

    while e > 0 {
        if (e & 1) == 1 {
            result *= &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }
    result
}
