//! Hitung batch calculator
//!
//! Recalculates a JSON batch of expense and project records with the tax and
//! profitability engine and writes a JSON report to stdout.
//!
//! Usage:
//!   hitung batch.json   - read the batch from a file
//!   hitung              - read the batch from stdin (also `hitung -`)

mod batch;

use std::io::{Read, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hitung_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args().nth(1);
    let raw = read_input(path.as_deref())?;
    let input: batch::BatchInput =
        serde_json::from_str(&raw).context("Batch document is not valid JSON")?;

    info!(
        expenses = input.expenses.len(),
        projects = input.projects.len(),
        parallel = config.batch.parallel,
        "Recalculating batch"
    );

    let report = batch::run(&input, config.batch.parallel);
    info!(failed = report.failed, "Batch recalculated");

    let mut stdout = std::io::stdout().lock();
    if config.batch.pretty {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
    } else {
        serde_json::to_writer(&mut stdout, &report)?;
    }
    writeln!(stdout)?;

    Ok(())
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read batch from stdin")?;
            Ok(raw)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read batch file {path}"))
        }
    }
}
