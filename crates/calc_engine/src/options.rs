use serde::{Deserialize, Serialize};

/// Upper bound applied to [`EvalOptions::max_fraction_digits`].
pub const MAX_FRACTION_DIGITS: usize = 1000;

/// Limits and output precision for [`crate::RationalEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Largest absolute integer exponent evaluated exactly.
    pub max_exponent: u32,
    /// Upper bound on the bit size of an exact power result.
    pub max_result_bits: u64,
    /// Fractional digits kept for non-terminating decimals, at most
    /// [`MAX_FRACTION_DIGITS`].
    pub max_fraction_digits: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_exponent: 4096,
            max_result_bits: 1 << 20,
            max_fraction_digits: 20,
        }
    }
}
