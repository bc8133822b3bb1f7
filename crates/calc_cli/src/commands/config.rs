//! config subcommand: show the effective configuration or write a default file.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::config::{target_path, SelcalcConfig};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default config file (to --config, else selcalc.toml)
    #[arg(long)]
    pub init: bool,
}

pub fn init(explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit);
    SelcalcConfig::default().save_new(&path)?;
    info!(path = %path.display(), "wrote default config");
    println!("{}", path.display());
    Ok(())
}

pub fn show(config: &SelcalcConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", config.to_toml()?).context("writing output")?;
    Ok(())
}
