//! Main application entry point

use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use gapviz_data::{load_dataset, DatasetSource, FileSource};
use gapviz_views::ViewCoordinator;

mod cli;
mod config;
mod demo;
mod logging;
mod renderer;
mod script;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::demo::DemoSource;
use crate::renderer::JsonLinesRenderer;
use crate::script::{parse_script, ScriptEvent};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Parse the script before loading so a typo fails fast
    let events = match &cli.events {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read event script {}", path.display()))?;
            parse_script(&text).with_context(|| format!("Invalid event script {}", path.display()))?
        }
        None => Vec::new(),
    };

    let source = dataset_source(&cli)?;
    let dataset = load_dataset(source.as_ref(), &config.dataset)
        .await
        .with_context(|| format!("Failed to load dataset from {}", source.source_name()))?;

    let renderer = JsonLinesRenderer::new(BufWriter::new(io::stdout()), cli.pretty);
    let mut coordinator = ViewCoordinator::new(Arc::new(dataset), config.presentation, renderer)
        .context("Failed to build the initial selection")?;

    let total = events.len();
    let mut rejected = 0;
    for ScriptEvent { line, event } in events {
        if let Err(e) = coordinator.handle(event) {
            warn!("Script line {} rejected: {}", line, e);
            rejected += 1;
        }
    }

    let renderer = coordinator.into_renderer();
    info!(
        "Session finished: {} events replayed, {} rejected, {} frames written",
        total,
        rejected,
        renderer.frames()
    );
    renderer.finish().context("Failed to write frames")?;

    Ok(())
}

fn dataset_source(cli: &Cli) -> Result<Box<dyn DatasetSource>> {
    if cli.demo {
        info!("Demo mode: using synthetic data");
        return Ok(Box::new(DemoSource::new()));
    }

    match (&cli.data, &cli.geography) {
        (Some(data), Some(geography)) => Ok(Box::new(FileSource::new(data, geography))),
        _ => anyhow::bail!("--data and --geography are required unless --demo is given"),
    }
}
