use calc_engine::EvalOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::is_expression_char;

/// Characters replaced before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Replaced by the last successfully computed answer.
    pub previous_result: char,
    /// Replaced by the zero-based ordinal of the selection in its batch.
    pub selection_index: char,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            previous_result: '$',
            selection_index: '#',
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("placeholder {0:?} is part of the arithmetic character set")]
    Reserved(char),
    #[error("both placeholders are {0:?}")]
    Duplicate(char),
}

impl Placeholders {
    /// A placeholder must not be a character an expression may legitimately
    /// contain, and the two placeholders must differ.
    pub fn check(&self) -> Result<(), PlaceholderError> {
        for token in [self.previous_result, self.selection_index] {
            if is_expression_char(token) || token == '=' {
                return Err(PlaceholderError::Reserved(token));
            }
        }
        if self.previous_result == self.selection_index {
            return Err(PlaceholderError::Duplicate(self.previous_result));
        }
        Ok(())
    }
}

/// Everything needed to build a [`crate::Resolver`] over the default evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    pub placeholders: Placeholders,
    pub eval: EvalOptions,
}
