use calc_engine::{strip_trailing_zeros, EvalError, Evaluator, RationalEvaluator};
use tracing::{debug, trace};

use crate::options::{PlaceholderError, Placeholders, ResolverOptions};
use crate::tokens::{has_placeholders, substitute};
use crate::validate::{normalize, validate, RejectReason};

/// Value of the previous-result placeholder before anything was evaluated.
pub const INITIAL_RESULT: &str = "0";

/// Outcome of resolving one selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The selection evaluated; `output` replaces it.
    Evaluated {
        output: String,
        answer: String,
        append: bool,
    },
    /// Not arithmetic; `output` is the original text.
    Rejected { output: String, reason: RejectReason },
    /// Arithmetic characters only, but not one well-formed expression;
    /// `output` is the substituted text.
    Failed { output: String, error: EvalError },
}

impl Resolution {
    pub fn output(&self) -> &str {
        match self {
            Resolution::Evaluated { output, .. }
            | Resolution::Rejected { output, .. }
            | Resolution::Failed { output, .. } => output,
        }
    }

    pub fn into_output(self) -> String {
        match self {
            Resolution::Evaluated { output, .. }
            | Resolution::Rejected { output, .. }
            | Resolution::Failed { output, .. } => output,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self, Resolution::Evaluated { .. })
    }

    /// The formatted answer, when evaluation succeeded.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Resolution::Evaluated { answer, .. } => Some(answer),
            _ => None,
        }
    }
}

/// Resolves selected text into arithmetic answers, remembering the last one.
///
/// One instance serves one batch of selections; it is not meant to be shared
/// between concurrent callers.
#[derive(Debug, Clone)]
pub struct Resolver<E: Evaluator = RationalEvaluator> {
    evaluator: E,
    placeholders: Placeholders,
    last_result: String,
}

impl Resolver<RationalEvaluator> {
    pub fn new() -> Self {
        Self::with_evaluator(RationalEvaluator::new())
    }

    pub fn from_options(options: &ResolverOptions) -> Result<Self, PlaceholderError> {
        Self::with_evaluator(RationalEvaluator::with_options(options.eval))
            .with_placeholders(options.placeholders)
    }
}

impl Default for Resolver<RationalEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Resolver<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            placeholders: Placeholders::default(),
            last_result: INITIAL_RESULT.to_string(),
        }
    }

    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Result<Self, PlaceholderError> {
        placeholders.check()?;
        self.placeholders = placeholders;
        Ok(self)
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// Forget the previous answer, as at the start of a new batch.
    pub fn reset(&mut self) {
        self.last_result = INITIAL_RESULT.to_string();
    }

    /// Resolve `text` as the selection with ordinal `index`.
    pub fn resolve(&mut self, text: &str, index: u64) -> String {
        self.resolve_detailed(text, index).into_output()
    }

    /// Resolve `text` as the first selection of a batch.
    pub fn resolve_default(&mut self, text: &str) -> String {
        self.resolve(text, 0)
    }

    pub fn resolve_detailed(&mut self, text: &str, index: u64) -> Resolution {
        let substituted = substitute(text, &self.placeholders, &self.last_result, index);
        if has_placeholders(text, &self.placeholders) {
            trace!(%substituted, index, "substituted placeholders");
        }

        let shape = match validate(&substituted) {
            Ok(shape) => shape,
            Err(reason) => {
                debug!(%reason, "selection is not arithmetic");
                return Resolution::Rejected {
                    output: text.to_string(),
                    reason,
                };
            }
        };

        let source = normalize(&substituted);
        trace!(%source, append = shape.append_mode(), "evaluating selection");

        let value = match self.evaluator.evaluate(&source) {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, %source, "evaluation failed");
                return Resolution::Failed {
                    output: substituted,
                    error,
                };
            }
        };

        let answer = strip_trailing_zeros(&value.to_decimal_string(self.evaluator.max_fraction_digits()));
        debug!(%source, %answer, "resolved selection");
        self.last_result.clone_from(&answer);

        let append = shape.append_mode();
        let output = if append {
            format!("{}{}", substituted, answer)
        } else {
            answer.clone()
        };

        Resolution::Evaluated {
            output,
            answer,
            append,
        }
    }
}
