pub mod charset;
pub mod component;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UrlCommands {
    /// Percent-encode text using the bytes of a charset
    Encode {
        #[command(flatten)]
        config: charset::Config,
    },
    /// Percent-decode text and interpret the bytes in a charset
    Decode {
        #[command(flatten)]
        config: charset::Config,
    },
    /// Escape a URL component, keeping only unreserved characters
    Escape {
        #[command(flatten)]
        config: component::Config,
    },
    /// Escape a URL path, keeping `/` separators
    EscapePath {
        #[command(flatten)]
        config: component::Config,
    },
    /// Escape form data, spaces becoming `+`
    EscapeForm {
        #[command(flatten)]
        config: component::Config,
    },
    /// Decode form data, `+` becoming a space
    DecodeForm {
        #[command(flatten)]
        config: component::Config,
    },
}
