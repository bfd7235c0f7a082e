use clap::Args;

use crate::error::Result;
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the JSON file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let json = read_text(config.file.as_deref())?;
    println!("{}", kotoba_tree::json_to_xml(&json)?);
    Ok(())
}
