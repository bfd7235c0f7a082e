use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod base64;
mod digest;
mod error;
mod escape;
mod hex;
mod output;
mod query;
mod tree;
mod url;
mod utils;

use error::Result;

use base64::Base64Commands;
use hex::HexCommands;
use tree::TreeCommands;
use url::UrlCommands;
use url::component::Mode;

#[derive(Parser)]
#[command(name = "kotoba")]
#[command(about = "Text and byte codec toolkit", long_about = None)]
struct Cli {
    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Base64 operations
    Base64 {
        #[command(subcommand)]
        command: Base64Commands,
    },
    /// Hexadecimal operations
    Hex {
        #[command(subcommand)]
        command: HexCommands,
    },
    /// Compute a message digest
    Digest {
        #[command(flatten)]
        config: digest::Config,
    },
    /// Escape or unescape text for a target syntax
    Escape {
        #[command(flatten)]
        config: escape::Config,
    },
    /// URL percent-encoding operations
    Url {
        #[command(subcommand)]
        command: UrlCommands,
    },
    /// Structural tree and XML conversion
    Tree {
        #[command(subcommand)]
        command: TreeCommands,
    },
    /// Parse a query string
    Query {
        #[command(flatten)]
        config: query::Config,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Base64 { command } => match command {
            Base64Commands::Encode { config } => {
                base64::encode::execute(config)?;
            }
            Base64Commands::Decode { config } => {
                base64::decode::execute(config)?;
            }
        },
        Commands::Hex { command } => match command {
            HexCommands::Encode { config } => {
                hex::encode::execute(config)?;
            }
            HexCommands::Decode { config } => {
                hex::decode::execute(config)?;
            }
        },
        Commands::Digest { config } => {
            digest::execute(config)?;
        }
        Commands::Escape { config } => {
            escape::execute(config)?;
        }
        Commands::Url { command } => match command {
            UrlCommands::Encode { config } => {
                url::charset::encode(config)?;
            }
            UrlCommands::Decode { config } => {
                url::charset::decode(config)?;
            }
            UrlCommands::Escape { config } => {
                url::component::execute(config, Mode::Escape)?;
            }
            UrlCommands::EscapePath { config } => {
                url::component::execute(config, Mode::EscapePath)?;
            }
            UrlCommands::EscapeForm { config } => {
                url::component::execute(config, Mode::EscapeForm)?;
            }
            UrlCommands::DecodeForm { config } => {
                url::component::execute(config, Mode::DecodeForm)?;
            }
        },
        Commands::Tree { command } => match command {
            TreeCommands::ToXml { config } => {
                tree::to_xml::execute(config)?;
            }
            TreeCommands::FromXml { config } => {
                tree::from_xml::execute(config)?;
            }
        },
        Commands::Query { config } => {
            query::execute(config)?;
        }
    }

    Ok(())
}
