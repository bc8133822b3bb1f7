//! Character-class check deciding whether a selection looks like arithmetic.
//!
//! Accepted shape: any run of digits, `+ - / * ^ ( ) .` and whitespace,
//! optionally followed by a single `=` and nothing but whitespace. The check
//! is deliberately shallow; well-formedness is the evaluator's problem.

use std::fmt;

/// What the scanner learned about an accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Byte offset of the trailing `=`, if any.
    pub equals_at: Option<usize>,
}

impl Shape {
    /// The answer is appended after the text instead of replacing it.
    pub fn append_mode(&self) -> bool {
        self.equals_at.is_some()
    }
}

/// Why a selection was not treated as arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    InvalidCharacter { ch: char, offset: usize },
    TextAfterEquals { ch: char, offset: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidCharacter { ch, offset } => {
                write!(f, "invalid character {:?} at byte {}", ch, offset)
            }
            RejectReason::TextAfterEquals { ch, offset } => {
                write!(f, "unexpected {:?} after '=' at byte {}", ch, offset)
            }
        }
    }
}

/// Digits, operators, parentheses, the decimal point and whitespace.
pub fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '/' | '*' | '^' | '(' | ')' | '.') || c.is_whitespace()
}

pub fn validate(text: &str) -> Result<Shape, RejectReason> {
    let mut equals_at = None;

    for (offset, ch) in text.char_indices() {
        match equals_at {
            None if is_expression_char(ch) => {}
            None if ch == '=' => equals_at = Some(offset),
            None => return Err(RejectReason::InvalidCharacter { ch, offset }),
            Some(_) if ch.is_whitespace() => {}
            Some(_) => return Err(RejectReason::TextAfterEquals { ch, offset }),
        }
    }

    Ok(Shape { equals_at })
}

/// Drop the `=` and collapse every whitespace run into one space.
pub fn normalize(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '=')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
