//! One user-triggered action over every caret of an editor.
//!
//! The action starts from a fresh previous result, hands out selection
//! indices 0, 1, 2, ... to carets that actually carry a selection, and skips
//! carets without one.

use calc_engine::Evaluator;
use tracing::debug;

use crate::resolver::{Resolution, Resolver};

pub struct Batch<'r, E: Evaluator> {
    resolver: &'r mut Resolver<E>,
    next_index: u64,
}

impl<'r, E: Evaluator> Batch<'r, E> {
    /// Start a batch; the resolver's previous result is reset.
    pub fn new(resolver: &'r mut Resolver<E>) -> Self {
        resolver.reset();
        Self {
            resolver,
            next_index: 0,
        }
    }

    /// Index the next selection will receive.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn resolver(&self) -> &Resolver<E> {
        self.resolver
    }

    /// Resolve one selection and advance the index.
    pub fn resolve_selection(&mut self, text: &str) -> Resolution {
        let resolution = self.resolver.resolve_detailed(text, self.next_index);
        self.next_index += 1;
        resolution
    }

    /// Resolve every caret in order. Carets without a selection yield `None`
    /// and do not consume an index.
    pub fn resolve_carets<'a, I>(&mut self, carets: I) -> Vec<Option<String>>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let replacements: Vec<Option<String>> = carets
            .into_iter()
            .map(|caret| caret.map(|text| self.resolve_selection(text).into_output()))
            .collect();
        debug!(
            carets = replacements.len(),
            selections = self.next_index,
            "resolved batch"
        );
        replacements
    }
}

/// The action only makes sense when at least one caret has a selection.
pub fn is_actionable<'a, I>(carets: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    carets.into_iter().any(|caret| caret.is_some())
}
