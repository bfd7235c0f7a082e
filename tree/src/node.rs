use kotoba::OrderedMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::Value;

use crate::error::Error;

/// A nested key/value tree.
///
/// A container maps element names to child nodes in document order and owns
/// its children exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    Container(OrderedMap<Node>),
}

impl Node {
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    pub fn container<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Container(children.into_iter().collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(text) => Some(text),
            Node::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&OrderedMap<Node>> {
        match self {
            Node::Scalar(_) => None,
            Node::Container(children) => Some(children),
        }
    }

    /// Child of a container by element name.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_container().and_then(|children| children.get(key))
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Scalar(String::new())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(text) => serializer.serialize_str(text),
            Node::Container(children) => serializer.collect_map(children.iter()),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::try_from(value).map_err(D::Error::custom)
    }
}

impl TryFrom<Value> for Node {
    type Error = Error;

    /// Strings, numbers and booleans become scalars holding their JSON text,
    /// `null` an empty scalar, objects containers. Arrays are rejected.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        from_json_value(value, "$")
    }
}

fn from_json_value(value: Value, path: &str) -> Result<Node, Error> {
    match value {
        Value::Null => Ok(Node::Scalar(String::new())),
        Value::Bool(b) => Ok(Node::Scalar(b.to_string())),
        Value::Number(n) => Ok(Node::Scalar(n.to_string())),
        Value::String(s) => Ok(Node::Scalar(s)),
        Value::Array(_) => Err(Error::UnsupportedJson {
            path: path.to_string(),
            kind: "array",
        }),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, child)| {
                let child_path = format!("{path}.{key}");
                from_json_value(child, &child_path).map(|node| (key, node))
            })
            .collect::<Result<OrderedMap<Node>, Error>>()
            .map(Node::Container),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::Node;
    use crate::error::Error;

    fn sample() -> Node {
        Node::container([
            ("name", Node::scalar("kotoba")),
            (
                "meta",
                Node::container([("version", Node::scalar("1")), ("stable", Node::scalar("true"))]),
            ),
        ])
    }

    #[test]
    fn test_accessors() {
        let node = sample();
        assert_eq!(Some("kotoba"), node.get("name").and_then(Node::as_scalar));
        assert_eq!(
            Some("1"),
            node.get("meta")
                .and_then(|m| m.get("version"))
                .and_then(Node::as_scalar)
        );
        assert!(node.get("missing").is_none());
        assert!(Node::scalar("x").get("x").is_none());
    }

    #[test]
    fn test_serialize_keeps_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(r#"{"name":"kotoba","meta":{"version":"1","stable":"true"}}"#, json);
    }

    #[rstest(
        input,
        expected,
        case(json!("text"), Node::scalar("text")),
        case(json!(42), Node::scalar("42")),
        case(json!(1.5), Node::scalar("1.5")),
        case(json!(false), Node::scalar("false")),
        case(json!(null), Node::scalar("")),
        case(
            json!({"z": "last", "a": {"b": 1}}),
            Node::container([("z", Node::scalar("last")), ("a", Node::container([("b", Node::scalar("1"))]))])
        )
    )]
    fn test_try_from_json(input: serde_json::Value, expected: Node) {
        assert_eq!(expected, Node::try_from(input).unwrap());
    }

    #[test]
    fn test_try_from_json_rejects_arrays() {
        let result = Node::try_from(json!({"items": {"list": [1, 2]}}));
        match result {
            Err(Error::UnsupportedJson { path, kind }) => {
                assert_eq!("$.items.list", path);
                assert_eq!("array", kind);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize() {
        let node: Node = serde_json::from_str(r#"{"a":{"b":"c"}}"#).unwrap();
        assert_eq!(
            Node::container([("a", Node::container([("b", Node::scalar("c"))]))]),
            node
        );
        assert!(serde_json::from_str::<Node>("[1]").is_err());
    }
}
