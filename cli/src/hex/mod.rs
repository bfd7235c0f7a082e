pub mod decode;
pub mod encode;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum HexCommands {
    /// Encode bytes as lowercase hexadecimal
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Decode hexadecimal text into bytes
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
}
