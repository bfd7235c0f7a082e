use clap::Args;
use kotoba::decoder::Decoder;
use kotoba_tree::Node;

use crate::error::Result;
use crate::output::{OutputFormat, render_structured};
use crate::utils::read_text;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the XML file. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let xml = read_text(config.file.as_deref())?;
    let node: Node = xml.as_str().decode()?;

    let rendered = match config.output {
        OutputFormat::Text => outline(&node),
        format => render_structured(&node, format)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// One line per element, children indented by two spaces.
fn outline(node: &Node) -> String {
    let mut out = String::new();
    match node {
        Node::Scalar(text) => out.push_str(text),
        Node::Container(_) => write_outline(node, 0, &mut out),
    }
    out
}

fn write_outline(node: &Node, depth: usize, out: &mut String) {
    let Some(children) = node.as_container() else {
        return;
    };
    for (name, child) in children.iter() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(name);
        out.push(':');
        match child {
            Node::Scalar(text) => {
                if !text.is_empty() {
                    out.push(' ');
                    out.push_str(text);
                }
                out.push('\n');
            }
            Node::Container(_) => {
                out.push('\n');
                write_outline(child, depth + 1, out);
            }
        }
    }
}
