//! Structural conversion between nested key/value trees and element trees.
//!
//! A [`Node`] is either a text scalar or an ordered container of named
//! children. [`to_xml`] writes it as XML, [`from_xml`] reads XML back, and
//! [`json_to_xml`]/[`xml_to_json`] bridge to JSON objects through the same
//! tree.
//!
//! The XML mapping is lossy for attributes and for repeated sibling tags; see
//! the [`xml`] module.
//!
//! ```
//! use kotoba_tree::{Node, from_xml, to_xml};
//!
//! let node = Node::container([("greeting", Node::scalar("hello"))]);
//! let xml = to_xml(&node).unwrap();
//! assert_eq!(xml, "<greeting>hello</greeting>");
//! assert_eq!(from_xml(&xml).unwrap(), node);
//! ```

pub mod error;
pub mod node;
pub mod xml;

use kotoba::decoder::{DecodableFrom, Decoder};
use kotoba::encoder::{EncodableTo, Encoder};
use serde_json::Value;

pub use error::Error;
pub use node::Node;
pub use xml::{from_xml, json_value_to_xml, to_xml};

/// Converts a JSON object into XML elements.
///
/// Arrays become repeated sibling elements, see [`json_value_to_xml`].
///
/// # Errors
///
/// Fails if `json` is not valid JSON, is an array at the top level, or uses a
/// key that is not a legal element name.
pub fn json_to_xml(json: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(json)?;
    json_value_to_xml(&value)
}

/// Converts XML into pretty-printed JSON.
pub fn xml_to_json(xml: &str) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&from_xml(xml)?)?)
}

impl DecodableFrom<&str> for Node {}

impl Decoder<&str, Node> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Node, Self::Error> {
        from_xml(self)
    }
}

impl EncodableTo<Node> for String {}

impl Encoder<Node, String> for Node {
    type Error = Error;

    fn encode(&self) -> Result<String, Self::Error> {
        to_xml(self)
    }
}
