//! Adapter selection for the configured input and output.

use recordboard_application::ports::{DisplaySurface, EventSource};
use recordboard_domain::{DomainError, OutputFormat, RenderConfig};
use recordboard_infrastructure::events::JsonLinesEventSource;
use recordboard_infrastructure::surface::{HtmlTableSurface, TextTableSurface};
use tracing::info;

/// Reads frames from `input`, where `-` means stdin.
pub async fn build_event_source(input: &str) -> Result<Box<dyn EventSource>, DomainError> {
    if input == "-" {
        info!("Reading event frames from stdin");
        return Ok(Box::new(JsonLinesEventSource::stdin()?));
    }

    info!(path = input, "Reading event frames from file");
    Ok(Box::new(JsonLinesEventSource::open(input).await?))
}

pub fn build_surface(config: &RenderConfig) -> Box<dyn DisplaySurface> {
    match (config.format, &config.output) {
        (OutputFormat::Html, Some(path)) => {
            Box::new(HtmlTableSurface::new(config.table_id.as_str()).with_output(path))
        }
        (OutputFormat::Html, None) => {
            Box::new(HtmlTableSurface::new(config.table_id.as_str()).with_stdout())
        }
        (OutputFormat::Text, Some(path)) => Box::new(TextTableSurface::stdout().with_output(path)),
        (OutputFormat::Text, None) => Box::new(TextTableSurface::stdout()),
    }
}
