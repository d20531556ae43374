use super::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output surface used to display the record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<tbody>` fragment with escaped cells
    #[default]
    Html,
    /// Aligned plain-text table
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(ConfigError::Validation(format!(
                "unknown output format '{}' (expected html or text)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// File the rendered table is written to on every update.
    /// When unset, the table goes to stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// `id` attribute of the rendered `<tbody>` (html only)
    #[serde(default = "default_table_id")]
    pub table_id: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output: None,
            table_id: default_table_id(),
        }
    }
}

fn default_table_id() -> String {
    "records-body".to_string()
}
