use std::io::{self, Write};

use clap::Args;
use kotoba::decoder::Decoder;
use kotoba_bytecodec::Hex;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the hexadecimal file. If not specified, reads from stdin
    file: Option<String>,

    /// Print the decoded bytes as UTF-8 text followed by a newline
    #[arg(long)]
    text: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = String::from_utf8(read_input(config.file.as_deref())?)?;
    let text: String = input.split_ascii_whitespace().collect();

    if config.text {
        println!("{}", kotoba_bytecodec::hex::decode_to_string(&text)?);
        return Ok(());
    }

    let bytes: Vec<u8> = Hex::new(text).decode()?;
    io::stdout().write_all(&bytes)?;
    Ok(())
}
