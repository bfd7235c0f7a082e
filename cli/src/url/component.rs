use clap::Args;

use crate::error::Result;
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Mode {
    Escape,
    EscapePath,
    EscapeForm,
    DecodeForm,
}

pub(crate) fn execute(config: Config, mode: Mode) -> Result<()> {
    let text = read_text(config.file.as_deref())?;

    let output = match mode {
        Mode::Escape => kotoba_url::escape(&text),
        Mode::EscapePath => kotoba_url::escape_path(&text),
        Mode::EscapeForm => kotoba_url::escape_form(&text),
        Mode::DecodeForm => kotoba_url::decode_form(&text)?,
    };

    println!("{output}");
    Ok(())
}
