use recordboard_domain::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &config.logging.level);

    // stdout may carry the rendered table, so log lines go to stderr
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true);

    let file = match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_target(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    info!("Logging initialized at level: {}", config.logging.level);
    Ok(())
}

/// `RUST_LOG` wins over the configured level when it parses.
fn log_filter(rust_log: Option<String>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}
