//! batch subcommand: resolve selections read from stdin.

use std::io::{self, Read};

use anyhow::{Context, Result};
use calc_session::is_actionable;
use clap::Args;
use tracing::{debug, warn};

use super::{resolve_all, write_results, OutputFormat};
use crate::config::SelcalcConfig;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Selections are separated by NUL instead of newline (output too)
    #[arg(long)]
    pub null: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Split stdin into carets. Empty records are carets without a selection.
pub(crate) fn split_selections(input: &str, null: bool) -> Vec<Option<String>> {
    let records: Vec<&str> = if null {
        let mut records: Vec<&str> = input.split('\0').collect();
        if records.last() == Some(&"") {
            records.pop();
        }
        records
    } else {
        input.lines().collect()
    };

    records
        .into_iter()
        .map(|record| (!record.is_empty()).then(|| record.to_string()))
        .collect()
}

pub fn run(args: BatchArgs, config: &SelcalcConfig) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading selections from stdin")?;

    let carets = split_selections(&input, args.null);
    debug!(carets = carets.len(), "batch");

    if !is_actionable(carets.iter().map(|c| c.as_deref())) {
        warn!("no selections to resolve");
    }

    let mut resolver = config.build_resolver()?;
    let results = resolve_all(&mut resolver, &carets);
    let terminator = if args.null { "\0" } else { "\n" };
    write_results(&mut io::stdout().lock(), &results, args.format, terminator)
}
