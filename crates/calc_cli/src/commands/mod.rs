//! Subcommand handlers.

pub mod batch;
pub mod config;
pub mod eval;

use std::io::Write;

use anyhow::{Context, Result};
use calc_session::{Batch, Resolver};
use clap::ValueEnum;

use crate::json_types::ResolutionJson;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run one batch over `carets` and collect a JSON record per selection.
/// Carets without a selection stay `None` and do not consume an index.
pub(crate) fn resolve_all(resolver: &mut Resolver, carets: &[Option<String>]) -> Vec<Option<ResolutionJson>> {
    let mut batch = Batch::new(resolver);
    carets
        .iter()
        .map(|caret| {
            caret.as_deref().map(|text| {
                let index = batch.next_index();
                ResolutionJson::new(index, text, batch.resolve_selection(text))
            })
        })
        .collect()
}

/// Print results, one replacement per record followed by `terminator`, or
/// as a JSON array.
pub(crate) fn write_results<W: Write>(
    out: &mut W,
    results: &[Option<ResolutionJson>],
    format: OutputFormat,
    terminator: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                let text = result.as_ref().map(|r| r.output.as_str()).unwrap_or("");
                write!(out, "{}{}", text, terminator).context("writing output")?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(results).context("serializing results")?;
            writeln!(out, "{}", json).context("writing output")?;
        }
    }
    out.flush().context("flushing output")
}
