use calc_ast::{AddOp, Expr, MulOp};
use tracing::trace;

use crate::{EvalError, EvalOptions, Value};

/// Evaluates a whitespace-normalized arithmetic string.
///
/// Implementations only need digits, `+ - * / ^ ( ) .` and spaces; failure is
/// reported through the `Result`, never by panicking.
pub trait Evaluator {
    fn evaluate(&self, source: &str) -> Result<Value, EvalError>;

    /// Decimal digits to keep when the value has no exact short expansion.
    fn max_fraction_digits(&self) -> usize {
        EvalOptions::default().max_fraction_digits
    }
}

/// Default evaluator: parses with `calc_parser` and computes over exact rationals.
#[derive(Debug, Clone, Default)]
pub struct RationalEvaluator {
    options: EvalOptions,
}

impl RationalEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluate an already parsed expression tree.
    pub fn eval_expr(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Number(n) => Ok(Value::Exact(n.clone())),
            Expr::Neg(e) => Ok(-self.eval_expr(e)?),
            Expr::Sum(first, terms) => {
                terms
                    .iter()
                    .try_fold(self.eval_expr(first)?, |acc, (op, term)| {
                        let rhs = self.eval_expr(term)?;
                        match op {
                            AddOp::Add => acc.checked_add(rhs),
                            AddOp::Sub => acc.checked_sub(rhs),
                        }
                    })
            }
            Expr::Product(first, factors) => {
                factors
                    .iter()
                    .try_fold(self.eval_expr(first)?, |acc, (op, factor)| {
                        let rhs = self.eval_expr(factor)?;
                        match op {
                            MulOp::Mul => acc.checked_mul(rhs),
                            MulOp::Div => acc.checked_div(rhs),
                        }
                    })
            }
            Expr::Pow(b, e) => self
                .eval_expr(b)?
                .checked_pow(self.eval_expr(e)?, &self.options),
        }
    }
}

impl Evaluator for RationalEvaluator {
    fn evaluate(&self, source: &str) -> Result<Value, EvalError> {
        let expr = calc_parser::parse(source)?;
        trace!(%expr, nodes = expr.node_count(), "parsed arithmetic source");
        self.eval_expr(&expr)
    }

    fn max_fraction_digits(&self) -> usize {
        self.options.max_fraction_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_parser::ParseError;

    fn eval(source: &str) -> Result<String, EvalError> {
        let evaluator = RationalEvaluator::new();
        evaluator
            .evaluate(source)
            .map(|v| v.to_decimal_string(evaluator.max_fraction_digits()))
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(eval("1 + 2"), Ok("3".to_string()));
        assert_eq!(eval("1 - 2"), Ok("-1".to_string()));
        assert_eq!(eval("3 * 2"), Ok("6".to_string()));
        assert_eq!(eval("4 / 2"), Ok("2".to_string()));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1 + 2 * 3"), Ok("7".to_string()));
        assert_eq!(eval("(1 + 2) * 3"), Ok("9".to_string()));
        assert_eq!(eval("2 * 3 ^ 2"), Ok("18".to_string()));
        assert_eq!(eval("2 ^ 3 ^ 2"), Ok("512".to_string()));
        assert_eq!(eval("-2 ^ 2"), Ok("-4".to_string()));
        assert_eq!(eval("(-2) ^ 2"), Ok("4".to_string()));
    }

    #[test]
    fn test_big_numbers_are_exact() {
        assert_eq!(eval("1000000000000000 + 1"), Ok("1000000000000001".to_string()));
        assert_eq!(eval("256 * 256 * 256 * 256"), Ok("4294967296".to_string()));
        assert_eq!(eval("256 * 256 * 256 * 256 * 10"), Ok("42949672960".to_string()));
        assert_eq!(eval("256 * 256 * 256 * 256 * 1.1"), Ok("4724464025.6".to_string()));
        assert_eq!(eval("2 ^ 64"), Ok("18446744073709551616".to_string()));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(eval("1.5 * 2"), Ok("3".to_string()));
        assert_eq!(eval("0.1 + 0.2"), Ok("0.3".to_string()));
        assert!(eval("2 / 3").unwrap().starts_with("0.66666"));
        assert_eq!(eval("2 ^ -2"), Ok("0.25".to_string()));
    }

    #[test]
    fn test_fractional_exponent_falls_back_to_float() {
        assert_eq!(eval("4 ^ 0.5"), Ok("2".to_string()));
        assert!(eval("2 ^ 0.5").unwrap().starts_with("1.41421356"));
    }

    #[test]
    fn test_failures() {
        assert_eq!(eval("1 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("(-8) ^ 0.5"), Err(EvalError::NonFinite));
        assert!(matches!(eval("2 ^ 100000"), Err(EvalError::ExponentTooLarge(_))));
        assert!(matches!(
            eval("1 + 2 3 + 4"),
            Err(EvalError::Parse(ParseError::UnconsumedInput(_)))
        ));
        assert!(matches!(eval("(1 + 2"), Err(EvalError::Parse(_))));
        assert_eq!(eval(""), Err(EvalError::Parse(ParseError::Empty)));
    }

    #[test]
    fn test_long_chains_evaluate_iteratively() {
        assert_eq!(eval(&vec!["1"; 100_000].join("+")), Ok("100000".to_string()));
        assert_eq!(eval(&vec!["1"; 100_001].join(" - ")), Ok("-99999".to_string()));
        assert_eq!(eval(&vec!["2"; 1_000].join("*")), eval("2 ^ 1000"));
        assert_eq!(eval(&vec!["1^2"; 300].join(" + ")), Ok("300".to_string()));
        assert_eq!(
            eval(&format!("{} / 0", vec!["3"; 10_000].join(" * "))),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_custom_fraction_digits() {
        let evaluator = RationalEvaluator::with_options(EvalOptions {
            max_fraction_digits: 4,
            ..EvalOptions::default()
        });
        let value = evaluator.evaluate("2 / 3").unwrap();
        assert_eq!(value.to_decimal_string(evaluator.max_fraction_digits()), "0.6667");
    }
}
