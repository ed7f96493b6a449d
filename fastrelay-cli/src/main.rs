//! fastrelay - lowest-latency relay picker.
//!
//! Fetches the relay catalog, pings every eligible relay once and prints the
//! fastest one (or a ranked shortlist with `-n`).
//!
//! Exit status: 0 on success, 1 on fatal errors (catalog retrieval, invalid
//! settings), 2 when no relay passed the filters and answered a probe.

#![allow(clippy::print_stdout, clippy::print_stderr, reason = "CLI tool outputs to stdout/stderr")]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

use cli::Cli;
use fastrelay_client::{CatalogClient, CatalogProvider, FileCatalog};
use fastrelay_core::{EligibilityFilter, IcmpProber, RelaySelector};
use fastrelay_types::{CandidateServer, LatencyMeasurement, SelectionError};

const EXIT_NO_RESULT: u8 = 2;

enum Outcome {
    Selected(String),
    NoResult(SelectionError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(Outcome::Selected(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        },
        Ok(Outcome::NoResult(reason)) => {
            eprintln!("{}", reason.to_string().yellow());
            ExitCode::from(EXIT_NO_RESULT)
        },
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        },
    }
}

/// Logs go to stderr so stdout carries only the selection.
fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

async fn run(cli: Cli) -> Result<Outcome> {
    let config = cli.selection_config();
    config.check().context("invalid selection settings")?;

    let catalog = fetch_catalog(&cli, &config.server_type).await?;
    let filter = EligibilityFilter::from_config(&config);
    let selector = RelaySelector::new(IcmpProber::new(config.probe_timeout()));

    tracing::info!(
        server_type = %config.server_type,
        country = ?filter.country(),
        diskless_only = filter.diskless_only(),
        count = config.count,
        "Selecting relay"
    );

    let entries: Vec<LatencyMeasurement> = if config.wants_single() {
        selector.select_best(&catalog, &filter).await.into_iter().collect()
    } else {
        selector.select_top_n(&catalog, &filter, config.count).await.into_vec()
    };

    let Some(best) = entries.first() else {
        return Ok(Outcome::NoResult(SelectionError::NoEligibleResult {
            catalog_size: catalog.len(),
            eligible: filter.count_eligible(&catalog),
        }));
    };
    tracing::debug!(server = ?best.server, "Best latency relay found");

    let text = output::render(cli.output, &entries, config.wants_single())
        .context("failed to render selection")?;
    Ok(Outcome::Selected(text))
}

async fn fetch_catalog(cli: &Cli, server_type: &str) -> Result<Vec<CandidateServer>> {
    let provider: Box<dyn CatalogProvider> = match &cli.catalog_file {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(
            CatalogClient::new(cli.catalog_config()).context("invalid catalog settings")?,
        ),
    };

    provider.fetch_catalog(server_type).await.map_err(|e| {
        let context = if e.is_remote() {
            "relay directory is unavailable"
        } else {
            "failed to retrieve relay catalog"
        };
        anyhow::Error::new(e).context(context)
    })
}
