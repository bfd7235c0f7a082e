use clap::Args;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    // Input bytes are encoded exactly as read, trailing newline included
    let data = read_input(config.file.as_deref())?;
    println!("{}", kotoba_bytecodec::base64::encode(&data));
    Ok(())
}
