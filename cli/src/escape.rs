use clap::Args;
use kotoba_escape::Dialect;

use crate::error::Result;
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Target syntax: csv, json, html, xml or generic
    #[arg(short, long)]
    dialect: Dialect,

    /// Reverse the escaping instead of applying it
    #[arg(short, long)]
    unescape: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_text(config.file.as_deref())?;

    let output = if config.unescape {
        kotoba_escape::unescape(config.dialect, &text)?
    } else {
        kotoba_escape::escape(config.dialect, &text)
    };

    println!("{output}");
    Ok(())
}
