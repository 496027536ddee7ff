//! osrsdiff library root.
//! Exposes the experience model, the progress aggregator, the typed API
//! documents and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use cli::commands::{self, Context};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use utils::formatting::Style;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => commands::config::handle(&cli.command, ctx),
        Commands::Xp { .. } => commands::xp::handle(&cli.command, ctx),
        Commands::Stats { .. } => commands::stats::handle(&cli.command, ctx),
        Commands::Eta { .. } => commands::eta::handle(&cli.command, ctx),
        Commands::Top { .. } => commands::top::handle(&cli.command, ctx),
        Commands::Timeline { .. } => commands::timeline::handle(&cli.command, ctx),
        Commands::Export { .. } => commands::export::handle(&cli.command, ctx),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs; `cli` comes from `Cli::parse()`
pub fn run(cli: &Cli) -> AppResult<()> {
    // 1️⃣ diagnostics
    init_tracing(cli.verbose);

    // 2️⃣ load config once; `init` must work on a broken file too
    let config_path = cli
        .config_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    // 3️⃣ build the rendering context
    let style = Style::from_config(&cfg, cli.no_color);
    let ctx = Context {
        cfg,
        config_path,
        style,
    };

    tracing::debug!(config = %ctx.config_path.display(), "dispatching command");
    dispatch(cli, &ctx)
}
