pub mod decode;
pub mod encode;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Base64Commands {
    /// Encode bytes as standard padded Base64
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Decode Base64 text into bytes
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
}
