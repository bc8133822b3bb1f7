//! eval subcommand: resolve command-line arguments as one batch.

use std::io;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::{resolve_all, write_results, OutputFormat};
use crate::config::SelcalcConfig;

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Selections to resolve; each gets the next selection index
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: EvalArgs, config: &SelcalcConfig) -> Result<()> {
    let mut resolver = config.build_resolver()?;
    let carets: Vec<Option<String>> = args.texts.into_iter().map(Some).collect();
    debug!(selections = carets.len(), "eval");

    let results = resolve_all(&mut resolver, &carets);
    write_results(&mut io::stdout().lock(), &results, args.format, "\n")
}
