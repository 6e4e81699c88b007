//! Strategy Tracker - Traditional Companies vs. Startups Dashboard
//!
//! Loads the startup funding dataset once, then shows the derived tables in a
//! window or prints them to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use strategy_tracker::config::{Cli, OutputMode};
use strategy_tracker::gui::run_dashboard;
use strategy_tracker::summary::{render_json, render_text};
use strategy_tracker::TableCache;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // ─── 1) config & logging ─────────────────────────────────────────
    let cli = Cli::parse();
    init_logging();
    info!(data = %cli.data.display(), output = ?cli.output, "startup");

    // ─── 2) load once; a dataset error stops everything ──────────────
    let cache = TableCache::new(cli.dataset_options());
    let tables = cache
        .get_or_load()
        .with_context(|| format!("loading dataset {}", cli.data.display()))?;

    if !tables.report.mismatches.is_empty() {
        warn!(
            count = tables.report.mismatches.len(),
            "some tables do not line up with their constant values"
        );
    }

    // ─── 3) present ──────────────────────────────────────────────────
    match cli.output {
        OutputMode::Gui => run_dashboard(tables.clone())
            .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))?,
        OutputMode::Table => print!("{}", render_text(tables).context("formatting tables")?),
        OutputMode::Json => println!("{}", render_json(tables).context("serializing tables")?),
    }

    Ok(())
}
