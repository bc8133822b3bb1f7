//! Placeholder substitution, the first pass over a selection.

use crate::options::Placeholders;

/// Replace every previous-result placeholder with `last_result`, then every
/// selection-index placeholder with `index`.
///
/// Replacement is literal. The index pass runs over the output of the first
/// pass, so a `last_result` that itself contains the index placeholder is
/// expanded too.
pub fn substitute(text: &str, placeholders: &Placeholders, last_result: &str, index: u64) -> String {
    text.replace(placeholders.previous_result, last_result)
        .replace(placeholders.selection_index, &index.to_string())
}

/// Whether `text` mentions either placeholder.
pub fn has_placeholders(text: &str, placeholders: &Placeholders) -> bool {
    text.contains([placeholders.previous_result, placeholders.selection_index])
}
