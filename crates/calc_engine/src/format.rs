//! Decimal rendering of evaluation results.
//!
//! Exact rationals print as fixed decimals: integers in full, terminating
//! fractions exactly (when they fit in the digit budget), everything else
//! rounded half away from zero. Approximate values take their shortest
//! round-trip `f64` digits and then go through the same budget, so every
//! printed answer evaluates back to itself. Nothing switches to scientific
//! notation.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::options::MAX_FRACTION_DIGITS;

/// Fractional digits of the exact expansion of `q`, if it terminates.
fn terminating_digits(q: &BigRational) -> Option<usize> {
    let mut denom = q.denom().clone();
    let two = BigInt::from(2);
    let five = BigInt::from(5);

    let mut twos = 0usize;
    while denom.is_even() {
        denom /= &two;
        twos += 1;
    }
    let mut fives = 0usize;
    while (&denom % &five).is_zero() {
        denom /= &five;
        fives += 1;
    }

    denom.is_one().then(|| twos.max(fives))
}

pub(crate) fn format_exact(q: &BigRational, max_fraction_digits: usize) -> String {
    if q.is_integer() {
        return q.numer().to_string();
    }
    let max_fraction_digits = max_fraction_digits.min(MAX_FRACTION_DIGITS);

    let digits = terminating_digits(q)
        .filter(|d| *d <= max_fraction_digits)
        .unwrap_or(max_fraction_digits);

    let scale = BigInt::from(10).pow(digits as u32);
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    let scaled = (q.abs() * BigRational::from_integer(scale) + half)
        .floor()
        .to_integer();

    if scaled.is_zero() {
        return "0".to_string();
    }

    let mut text = scaled.to_string();
    if text.len() <= digits {
        text = format!("{}{}", "0".repeat(digits + 1 - text.len()), text);
    }

    let sign = if q.is_negative() { "-" } else { "" };
    if digits == 0 {
        return format!("{}{}", sign, text);
    }
    let (int_part, frac_part) = text.split_at(text.len() - digits);
    format!("{}{}.{}", sign, int_part, frac_part)
}

pub(crate) fn format_approx(x: f64, max_fraction_digits: usize) -> String {
    match shortest_decimal(x) {
        Some(q) => format_exact(&q, max_fraction_digits),
        None => x.to_string(),
    }
}

/// The decimal `Display` prints for `x`, as an exact rational.
fn shortest_decimal(x: f64) -> Option<BigRational> {
    if !x.is_finite() {
        return None;
    }
    let text = x.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let numer = BigInt::parse_bytes(format!("{}{}", int_part, frac_part).as_bytes(), 10)?;
    let denom = BigInt::from(10).pow(u32::try_from(frac_part.len()).ok()?);
    let q = BigRational::new(numer, denom);
    Some(if x.is_sign_negative() { -q } else { q })
}

/// Strip trailing zeros after a decimal point, then a bare trailing point.
///
/// `"6.00"` → `"6"`, `"0.660000"` → `"0.66"`. Strings without a `.` are
/// returned unchanged, so integers never lose digits.
pub fn strip_trailing_zeros(answer: &str) -> String {
    if !answer.contains('.') {
        return answer.to_string();
    }
    let trimmed = answer.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}
