use clap::Args;
use kotoba_query::{QueryParams, QueryValue};

use crate::error::Result;
use crate::output::{OutputFormat, render_structured};
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Raw query string without the leading `?`. If not specified, reads from stdin
    query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let raw = match config.query {
        Some(query) => query,
        None => read_text(None)?,
    };
    let raw = raw.strip_prefix('?').unwrap_or(&raw);

    let params = kotoba_query::parse(raw);

    let rendered = match config.output {
        OutputFormat::Text => listing(&params),
        format => render_structured(&params, format)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// `key=value` per value; a bare flag is printed as its key alone.
fn listing(params: &QueryParams) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        match value {
            QueryValue::Present => {
                out.push_str(key);
                out.push('\n');
            }
            _ => {
                for v in value.values() {
                    out.push_str(&format!("{key}={v}\n"));
                }
            }
        }
    }
    out
}
