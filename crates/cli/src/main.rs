//! # Recordboard
//!
//! Renders the DNS records pushed over a real-time event stream as a table.

mod bootstrap;
mod di;

use clap::Parser;
use recordboard_application::use_cases::{RenderRecordsUseCase, SubscribeRecordsUseCase};
use recordboard_domain::{CliOverrides, OutputFormat};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recordboard")]
#[command(version)]
#[command(about = "Live table of DNS records pushed over a real-time event stream")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Newline-delimited event frames; "-" reads stdin
    #[arg(short = 'i', long, default_value = "-")]
    input: String,

    /// Output format: html or text
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// File rewritten after every update (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Event name carrying the record list
    #[arg(short = 'e', long)]
    event: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        event: cli.event,
        format: cli.format,
        output: cli.output,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config)?;

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        event = %config.subscription.event,
        format = %config.render.format,
        output = ?config.render.output,
        "Configuration loaded"
    );

    let mut source = di::build_event_source(&cli.input).await?;
    let surface = di::build_surface(&config.render);
    let mut subscription = SubscribeRecordsUseCase::new(
        RenderRecordsUseCase::new(surface),
        config.subscription.event.clone(),
    );

    let shutdown = CancellationToken::new();
    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received");
            ctrl_c_token.cancel();
        }
    });

    match subscription.run(&mut source, shutdown).await {
        Ok(summary) => {
            info!(
                rendered = summary.rendered,
                rows = ?summary.last_row_count,
                "Recordboard stopped"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Subscription failed");
            Err(e.into())
        }
    }
}
