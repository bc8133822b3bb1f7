use calc_ast::{AddOp, Expr, MulOp};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::multispace0,
    combinator::{map, opt, value},
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::rc::Rc;

use crate::error::ParseError;

/// Deepest combined nesting of parentheses, chained powers and stacked signs.
pub const MAX_NESTING: usize = 128;

/// Convert a decimal string to BigRational.
/// Supports: "8.2" → 41/5, ".5" → 1/2, "8." → 8, "123" → 123
/// For "A.B", num = A*10^k + B, den = 10^k (where k = len(B))
fn decimal_to_rational(integer_part: &str, fractional_part: &str) -> BigRational {
    let parse_digits = |digits: &str| -> BigInt {
        if digits.is_empty() {
            BigInt::zero()
        } else {
            digits.parse().unwrap_or_else(|_| BigInt::zero())
        }
    };

    let int_val = parse_digits(integer_part);
    let k = fractional_part.len();
    if k == 0 {
        return BigRational::from_integer(int_val);
    }

    let ten = BigInt::from(10);
    let mut denominator = BigInt::one();
    for _ in 0..k {
        denominator *= &ten;
    }

    let numerator = int_val * &denominator + parse_digits(fractional_part);

    // BigRational::new reduces the fraction
    BigRational::new(numerator, denominator)
}

// Numeric literals: 123, 8.2, .5, 8.
fn parse_number(input: &str) -> IResult<&str, Rc<Expr>> {
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    let (remaining, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    let frac_part = maybe_frac.map(|(_, frac)| frac).unwrap_or("");

    // A lone "." is not a number
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }

    Ok((remaining, Expr::rational(decimal_to_rational(int_part, frac_part))))
}

fn parse_parens(input: &str) -> IResult<&str, Rc<Expr>> {
    delimited(tag("("), parse_expr, preceded(multispace0, tag(")")))(input)
}

fn parse_atom(input: &str) -> IResult<&str, Rc<Expr>> {
    preceded(multispace0, alt((parse_number, parse_parens)))(input)
}

// Power - right associative: 2^3^4 = 2^(3^4), not (2^3)^4
// Exponents may carry a sign: 2^-1, 2^-(1+1)
fn parse_power(input: &str) -> IResult<&str, Rc<Expr>> {
    let (input, base) = parse_atom(input)?;

    let try_caret = preceded::<_, _, _, nom::error::Error<&str>, _, _>(
        multispace0::<_, nom::error::Error<&str>>,
        tag::<_, _, nom::error::Error<&str>>("^"),
    )(input);

    if let Ok((input, _)) = try_caret {
        let (input, exp) = parse_power_exponent(input)?;
        Ok((input, Expr::pow(base, exp)))
    } else {
        Ok((input, base))
    }
}

fn parse_power_exponent(input: &str) -> IResult<&str, Rc<Expr>> {
    preceded(
        multispace0,
        alt((
            map(pair(tag("-"), parse_power_exponent), |(_, expr)| {
                Expr::neg(expr)
            }),
            map(pair(tag("+"), parse_power_exponent), |(_, expr)| expr),
            parse_power,
        )),
    )(input)
}

// Unary sign binds looser than ^ so -2^2 = -(2^2)
fn parse_unary(input: &str) -> IResult<&str, Rc<Expr>> {
    alt((
        map(
            pair(preceded(multispace0, tag("-")), parse_unary),
            |(_, expr)| Expr::neg(expr),
        ),
        map(
            pair(preceded(multispace0, tag("+")), parse_unary),
            |(_, expr)| expr,
        ),
        parse_power,
    ))(input)
}

// `* /` chain, kept flat
fn parse_term(input: &str) -> IResult<&str, Rc<Expr>> {
    let (input, first) = parse_unary(input)?;
    let (input, factors) = fold_many0(
        pair(
            preceded(
                multispace0,
                alt((value(MulOp::Mul, tag("*")), value(MulOp::Div, tag("/")))),
            ),
            parse_unary,
        ),
        Vec::new,
        |mut acc, factor| {
            acc.push(factor);
            acc
        },
    )(input)?;
    Ok((input, Expr::product(first, factors)))
}

// `+ -` chain, kept flat
fn parse_expr(input: &str) -> IResult<&str, Rc<Expr>> {
    let (input, first) = parse_term(input)?;
    let (input, terms) = fold_many0(
        pair(
            preceded(
                multispace0,
                alt((value(AddOp::Add, tag("+")), value(AddOp::Sub, tag("-")))),
            ),
            parse_term,
        ),
        Vec::new,
        |mut acc, term| {
            acc.push(term);
            acc
        },
    )(input)?;
    Ok((input, Expr::sum(first, terms)))
}

/// Reject inputs whose recursive constructs would nest past [`MAX_NESTING`].
///
/// Sums and products are flat; only open parentheses, the `^` chain at each
/// parenthesis level and a run of stacked signs recurse. A `^` chain ends at
/// `*`, `/` or a binary `+`/`-` on its own level.
fn check_nesting(input: &str) -> Result<(), ParseError> {
    // power chain length per open parenthesis level
    let mut chains: Vec<usize> = vec![0];
    let mut chain_total = 0usize;
    let mut sign_run = 0usize;
    let mut after_operand = false;

    for c in input.chars().filter(|c| !c.is_whitespace()) {
        let ends_chain = match c {
            '(' => {
                chains.push(0);
                false
            }
            ')' => {
                if chains.len() > 1 {
                    chain_total -= chains.pop().unwrap_or(0);
                }
                false
            }
            '^' => {
                if let Some(chain) = chains.last_mut() {
                    *chain += 1;
                    chain_total += 1;
                }
                false
            }
            '*' | '/' => true,
            '+' | '-' => after_operand,
            _ => false,
        };
        if ends_chain {
            if let Some(chain) = chains.last_mut() {
                chain_total -= *chain;
                *chain = 0;
            }
        }

        sign_run = if matches!(c, '+' | '-') { sign_run + 1 } else { 0 };
        after_operand = c.is_ascii_digit() || c == '.' || c == ')';

        if chains.len() - 1 + chain_total + sign_run > MAX_NESTING {
            return Err(ParseError::TooDeep(MAX_NESTING));
        }
    }
    Ok(())
}

/// Parse a complete arithmetic expression. Trailing input is an error.
pub fn parse(input: &str) -> Result<Rc<Expr>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    check_nesting(input)?;

    let (remaining, expr) = parse_expr(input).map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    Ok(expr)
}
