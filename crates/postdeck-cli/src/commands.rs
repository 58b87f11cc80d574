use std::sync::Arc;

use anyhow::{Context, Result};
use postdeck_providers::{HttpPostSource, PostSource, StaticPostSource};
use postdeck_runtime::{
    Config, DEFAULT_LOG_LEVEL, resolve_config_path, resolve_endpoint, resolve_log_path,
};

use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let log_level = cli
        .log_level
        .map(|level| level.to_string())
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_path = resolve_log_path(cli.log_file.as_deref(), &config)?;
    logging::init_file(&log_path, &log_level)?;

    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), &config);
    tracing::debug!(config = %config_path.display(), %endpoint, "starting postdeck");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let command = cli.command.unwrap_or(Commands::Browse {
        offline_sample: false,
    });

    match command {
        Commands::Browse { offline_sample } => {
            let source = build_source(&endpoint, offline_sample)?;
            handlers::browse::handle(&runtime, source)
        }
        Commands::List {
            expand,
            format,
            offline_sample,
        } => {
            let source = build_source(&endpoint, offline_sample)?;
            handlers::list::handle(&runtime, source, expand, format)
        }
    }
}

fn build_source(endpoint: &str, offline_sample: bool) -> Result<Arc<dyn PostSource>> {
    if offline_sample {
        return Ok(Arc::new(StaticPostSource::sample()));
    }
    Ok(Arc::new(HttpPostSource::new(endpoint)?))
}
