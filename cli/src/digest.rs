use std::io::{self, Write};

use clap::Args;
use kotoba_digest::Algorithm;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Hash algorithm: md5, sha1, sha256, sha384 or sha512
    #[arg(short, long, default_value = "sha256")]
    algorithm: Algorithm,

    /// Write the raw digest bytes instead of lowercase hex
    #[arg(long)]
    raw: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let data = read_input(config.file.as_deref())?;
    tracing::debug!(algorithm = %config.algorithm, len = data.len(), "hashing input");

    if config.raw {
        let digest = kotoba_digest::digest(config.algorithm, &data);
        io::stdout().write_all(&digest)?;
    } else {
        println!("{}", kotoba_digest::digest_hex(config.algorithm, &data));
    }
    Ok(())
}
