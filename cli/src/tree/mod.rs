pub mod from_xml;
pub mod to_xml;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum TreeCommands {
    /// Convert a JSON object into XML elements
    ToXml {
        #[command(flatten)]
        config: to_xml::Config,
    },
    /// Convert XML into a structural tree (JSON, YAML or an indented outline)
    FromXml {
        #[command(flatten)]
        config: from_xml::Config,
    },
}
