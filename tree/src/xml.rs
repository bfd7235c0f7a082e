//! Node tree ↔ XML element tree.
//!
//! Container keys are element names and scalars are text content. Attributes
//! are dropped when reading, and when a tag repeats among siblings only the
//! last occurrence survives, kept at the position where the tag first
//! appeared. An empty container and an empty
//! scalar both become an empty element, which reads back as an empty scalar.

use kotoba::OrderedMap;
use quick_xml::escape::{escape, resolve_xml_entity};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::Error;
use crate::node::Node;

// XML Name production restricted to what survives a round trip: no
// namespace prefixes, no leading digit, dash or dot.
const ELEMENT_NAME_PATTERN: &str = r"^[\p{L}_][\p{L}\p{N}_.\-]*$";

struct ElementNames {
    pattern: Regex,
}

impl ElementNames {
    fn new() -> Result<Self, Error> {
        Ok(ElementNames {
            pattern: Regex::new(ELEMENT_NAME_PATTERN)?,
        })
    }

    /// Names starting with `xml` in any case are reserved.
    fn check(&self, name: &str) -> Result<(), Error> {
        let reserved = name
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml"));
        if reserved || !self.pattern.is_match(name) {
            debug!(name, "rejected element name");
            return Err(Error::InvalidTag(name.to_string()));
        }
        Ok(())
    }
}

/// Serializes `node` as XML without a declaration or indentation.
///
/// Every key of every container becomes an element; a top-level scalar is
/// written as bare text.
///
/// # Errors
///
/// [`Error::InvalidTag`] if a key is not a legal element name.
pub fn to_xml(node: &Node) -> Result<String, Error> {
    let names = ElementNames::new()?;
    let mut out = String::new();
    write_node(&mut out, node, &names)?;
    trace!(len = out.len(), "serialized tree");
    Ok(out)
}

fn write_node(out: &mut String, node: &Node, names: &ElementNames) -> Result<(), Error> {
    match node {
        Node::Scalar(text) => out.push_str(&escape(text)),
        Node::Container(children) => {
            for (name, child) in children.iter() {
                names.check(name)?;
                open_tag(out, name);
                write_node(out, child, names)?;
                close_tag(out, name);
            }
        }
    }
    Ok(())
}

/// Serializes a JSON document as XML.
///
/// Objects map to elements as in [`to_xml`] and scalars to their JSON text,
/// `null` being empty. An array under a key becomes one element per item, all
/// named after the key; nested arrays flatten into the same run. [`from_xml`]
/// reads such a run back as its last item only.
///
/// # Errors
///
/// [`Error::InvalidTag`] for a key that is not a legal element name, and
/// [`Error::UnsupportedJson`] for a top-level array, which has no name.
pub fn json_value_to_xml(value: &Value) -> Result<String, Error> {
    let names = ElementNames::new()?;
    let mut out = String::new();
    write_json(&mut out, value, &names)?;
    trace!(len = out.len(), "serialized JSON document");
    Ok(out)
}

fn write_json(out: &mut String, value: &Value, names: &ElementNames) -> Result<(), Error> {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                write_json_element(out, name, child, names)?;
            }
        }
        // arrays below the top level are unrolled by write_json_element
        Value::Array(_) => {
            return Err(Error::UnsupportedJson {
                path: "$".to_string(),
                kind: "array",
            });
        }
        Value::Null => {}
        Value::String(text) => out.push_str(&escape(text)),
        Value::Bool(_) | Value::Number(_) => out.push_str(&value.to_string()),
    }
    Ok(())
}

fn write_json_element(
    out: &mut String,
    name: &str,
    value: &Value,
    names: &ElementNames,
) -> Result<(), Error> {
    names.check(name)?;
    if let Value::Array(items) = value {
        for item in items {
            write_json_element(out, name, item, names)?;
        }
        return Ok(());
    }
    open_tag(out, name);
    write_json(out, value, names)?;
    close_tag(out, name);
    Ok(())
}

fn open_tag(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Element being read: its children so far and its text content.
struct Frame {
    name: String,
    children: OrderedMap<Node>,
    has_elements: bool,
    text: String,
}

impl Frame {
    fn new(name: String) -> Self {
        Frame {
            name,
            children: OrderedMap::new(),
            has_elements: false,
            text: String::new(),
        }
    }

    fn attach(&mut self, name: String, node: Node) {
        self.has_elements = true;
        if self.children.insert(name.as_str(), node).is_some() {
            debug!(%name, parent = %self.name, "repeated element replaced earlier sibling");
        }
    }

    fn finish(self) -> (String, Node) {
        let node = if self.has_elements {
            Node::Container(self.children)
        } else {
            Node::Scalar(self.text)
        };
        (self.name, node)
    }
}

/// Parses XML into a [`Node`].
///
/// Top-level elements become the keys of the returned container. An element
/// without child elements becomes a scalar of its text; text mixed with child
/// elements is discarded. A document without any element is a scalar of its
/// text. Declarations, comments, processing instructions and attributes are
/// ignored.
pub fn from_xml(xml: &str) -> Result<Node, Error> {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![Frame::new(String::new())];
    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Frame::new(element_name(&e)?)),
            Event::Empty(e) => {
                let name = element_name(&e)?;
                current(&mut stack).attach(name, Node::Scalar(String::new()));
            }
            Event::End(e) => {
                if stack.len() < 2 {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    return Err(Error::UnexpectedEnd(name));
                }
                if let Some(frame) = stack.pop() {
                    let (name, node) = frame.finish();
                    current(&mut stack).attach(name, node);
                }
            }
            Event::Text(t) => {
                let text = t.unescape_with(resolve_xml_entity)?;
                current(&mut stack).text.push_str(&text);
            }
            Event::CData(c) => {
                let raw = c.into_inner();
                current(&mut stack).text.push_str(std::str::from_utf8(&raw)?);
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }
    if stack.len() > 1 {
        let name = stack.pop().map(|f| f.name).unwrap_or_default();
        return Err(Error::UnclosedElement(name));
    }
    Ok(stack
        .pop()
        .map(|document| document.finish().1)
        .unwrap_or_default())
}

fn current(stack: &mut [Frame]) -> &mut Frame {
    // the document frame is never popped
    let last = stack.len() - 1;
    &mut stack[last]
}

fn element_name(e: &BytesStart<'_>) -> Result<String, Error> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{from_xml, json_value_to_xml, to_xml};
    use crate::error::Error;
    use crate::node::Node;

    fn leaf(text: &str) -> Node {
        Node::scalar(text)
    }

    #[rstest(
        node,
        expected,
        case(Node::container([("a", leaf("1"))]), "<a>1</a>"),
        case(
            Node::container([("root", Node::container([("x", leaf("1")), ("y", leaf("2"))]))]),
            "<root><x>1</x><y>2</y></root>"
        ),
        case(Node::container([("t", leaf("a<b & \"c\""))]), "<t>a&lt;b &amp; &quot;c&quot;</t>"),
        case(Node::container([("empty", leaf(""))]), "<empty></empty>"),
        case(leaf("bare & text"), "bare &amp; text"),
        case(Node::container([("a", leaf("1")), ("b", leaf("2"))]), "<a>1</a><b>2</b>")
    )]
    fn test_to_xml(node: Node, expected: &str) {
        assert_eq!(expected, to_xml(&node).unwrap());
    }

    #[rstest]
    #[case::empty("")]
    #[case::leading_digit("1abc")]
    #[case::space("a b")]
    #[case::markup("a<b")]
    #[case::namespace("ns:tag")]
    #[case::reserved("XmlThing")]
    #[case::leading_dash("-x")]
    fn test_to_xml_invalid_tag(#[case] name: &str) {
        let node = Node::container([("ok", Node::container([(name, leaf("v"))]))]);
        match to_xml(&node) {
            Err(Error::InvalidTag(tag)) => assert_eq!(name, tag),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case::unicode("名前")]
    #[case::underscore("_private")]
    #[case::dotted_dashed("a.b-c_1")]
    fn test_to_xml_valid_tag(#[case] name: &str) {
        let node = Node::container([(name, leaf("v"))]);
        assert_eq!(format!("<{name}>v</{name}>"), to_xml(&node).unwrap());
    }

    #[test]
    fn test_from_xml() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- catalog -->
<catalog>
  <book id="b1">
    <title>Kotoba &amp; Co</title>
    <price>10</price>
  </book>
  <note><![CDATA[<raw>]]></note>
  <empty/>
</catalog>
"#;
        let expected = Node::container([(
            "catalog",
            Node::container([
                (
                    "book",
                    Node::container([("title", leaf("Kotoba & Co")), ("price", leaf("10"))]),
                ),
                ("note", leaf("<raw>")),
                ("empty", leaf("")),
            ]),
        )]);
        assert_eq!(expected, from_xml(xml).unwrap());
    }

    #[rstest(
        input,
        expected,
        case("", leaf("")),
        case("just text", leaf("just text")),
        case("<a>  padded  </a>", Node::container([("a", leaf("  padded  "))]))
    )]
    fn test_from_xml_scalars(input: &str, expected: Node) {
        assert_eq!(expected, from_xml(input).unwrap());
    }

    #[test]
    fn test_repeated_tag_keeps_last_occurrence() {
        let xml = "<list><item>1</item><other>x</other><item>2</item></list>";
        let expected = Node::container([(
            "list",
            Node::container([("item", leaf("2")), ("other", leaf("x"))]),
        )]);
        assert_eq!(expected, from_xml(xml).unwrap());
    }

    #[test]
    fn test_attributes_are_dropped() {
        let node = from_xml(r#"<a href="x"><b lang="en">t</b></a>"#).unwrap();
        assert_eq!(Node::container([("a", Node::container([("b", leaf("t"))]))]), node);
        assert_eq!("<a><b>t</b></a>", to_xml(&node).unwrap());
    }

    #[rstest]
    #[case::unclosed("<a><b>1</b>")]
    #[case::mismatched("<a><b>1</a></b>")]
    #[case::stray_end("text</a>")]
    #[case::unknown_entity("<a>&bogus;</a>")]
    fn test_from_xml_with_error(#[case] input: &str) {
        assert!(from_xml(input).is_err(), "{input}");
    }

    #[rstest]
    #[case(leaf("plain"))]
    #[case(leaf("needs <escaping> & 'quotes' \"too\""))]
    #[case(Node::container([("a", leaf("1"))]))]
    #[case(Node::container([
        ("root", Node::container([
            ("name", leaf("ünïcødé 😀")),
            ("nested", Node::container([("deep", Node::container([("x", leaf("y"))]))])),
            ("blank", leaf("")),
        ])),
        ("second", leaf("top-level sibling")),
    ]))]
    fn test_roundtrip(#[case] node: Node) {
        let xml = to_xml(&node).unwrap();
        assert_eq!(node, from_xml(&xml).unwrap(), "{xml}");
    }

    #[rstest(
        input,
        expected,
        case(json!({"a": [1, 2]}), "<a>1</a><a>2</a>"),
        case(json!({"a": []}), ""),
        case(json!({"a": [[1, 2], [3]]}), "<a>1</a><a>2</a><a>3</a>"),
        case(
            json!({"list": {"item": [{"id": 1}, {"id": 2}], "size": 2}}),
            "<list><item><id>1</id></item><item><id>2</id></item><size>2</size></list>"
        ),
        case(json!({"n": [null, "x<y", true]}), "<n></n><n>x&lt;y</n><n>true</n>"),
        case(json!("bare"), "bare")
    )]
    fn test_json_value_to_xml(input: serde_json::Value, expected: &str) {
        assert_eq!(expected, json_value_to_xml(&input).unwrap());
    }

    #[test]
    fn test_json_array_reads_back_as_last_item() {
        let xml = json_value_to_xml(&json!({"a": ["first", "last"]})).unwrap();
        assert_eq!(Node::container([("a", leaf("last"))]), from_xml(&xml).unwrap());
    }

    #[rstest]
    #[case::top_level_array(json!([1, 2]))]
    #[case::bad_name_in_array(json!({"ok": [{"1st": "x"}]}))]
    #[case::bad_name_of_empty_array(json!({"bad name": []}))]
    fn test_json_value_to_xml_with_error(#[case] input: serde_json::Value) {
        assert!(json_value_to_xml(&input).is_err());
    }

    #[test]
    fn test_from_xml_only_resolves_predefined_entities() {
        let node = from_xml("<a>&lt;&gt;&amp;&apos;&quot;&#233;</a>").unwrap();
        assert_eq!(Node::container([("a", leaf("<>&'\"é"))]), node);
        assert!(from_xml("<a>&copy;</a>").is_err());
    }

    #[test]
    fn test_empty_container_reads_back_as_empty_scalar() {
        let node = Node::container([("a", Node::container(Vec::<(String, Node)>::new()))]);
        let xml = to_xml(&node).unwrap();
        assert_eq!("<a></a>", xml);
        assert_eq!(Node::container([("a", leaf(""))]), from_xml(&xml).unwrap());
    }
}
