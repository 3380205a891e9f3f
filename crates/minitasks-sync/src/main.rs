/*
[INPUT]:  CLI arguments, optional YAML configuration, MINITASKS_* environment
[OUTPUT]: One synchronizer command executed and its view printed
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use minitasks_adapter::TasksClient;
use minitasks_sync::{SyncConfig, TaskSync};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = SyncConfig::load(args.config_path.as_deref()).context("load config")?;
    info!(base_url = %config.base_url, "configuration loaded");

    let client = Arc::new(
        TasksClient::with_config_and_base_url(config.client_config(), &config.base_url)
            .context("build task service client")?,
    );
    let sync = TaskSync::new(client.clone());

    let succeeded = cli::run(args.command, &sync, &client).await?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
