use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text listing
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Renders `value` as pretty JSON or YAML. Commands with a text listing handle
/// `Text` themselves; anything else falls back to JSON.
pub(crate) fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yml::to_string(value)?),
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
    }
}
