mod commands;
mod config;
mod json_types;
mod repl;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::{batch::BatchArgs, config::ConfigArgs, eval::EvalArgs};
use crate::config::SelcalcConfig;

/// Resolve selected arithmetic text in place.
#[derive(Parser, Debug)]
#[command(name = "selcalc", version, about)]
struct Cli {
    /// Config file (default: ./selcalc.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve each argument as one selection of a single batch
    Eval(EvalArgs),
    /// Resolve selections read from stdin as a single batch
    Batch(BatchArgs),
    /// Interactive session; the previous answer carries across lines
    Repl,
    /// Print the effective configuration
    Config(ConfigArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Config(ConfigArgs { init: true }) = cli.command {
        return commands::config::init(cli.config.as_deref());
    }

    let config = SelcalcConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Eval(args) => commands::eval::run(args, &config),
        Command::Batch(args) => commands::batch::run(args, &config),
        Command::Repl => {
            let mut session = repl::Repl::new(config.build_resolver()?);
            session.run()?;
            Ok(())
        }
        Command::Config(_) => commands::config::show(&config),
    }
}
