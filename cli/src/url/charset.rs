use clap::Args;

use crate::error::Result;
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Charset label, e.g. utf-8, shift_jis, windows-1252
    #[arg(short, long, default_value = "utf-8")]
    charset: String,
}

pub(crate) fn encode(config: Config) -> Result<()> {
    let text = read_text(config.file.as_deref())?;
    println!("{}", kotoba_url::encode(&text, &config.charset)?);
    Ok(())
}

pub(crate) fn decode(config: Config) -> Result<()> {
    let text = read_text(config.file.as_deref())?;
    println!("{}", kotoba_url::decode(&text, &config.charset)?);
    Ok(())
}
