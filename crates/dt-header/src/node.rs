use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{comment::strip_comments, extract, Value};

/// A labeled, typed devicetree block with its classified properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub node_type: String,
    /// Properties in source order. A repeated key keeps its first position and its last value.
    pub properties: IndexMap<String, Value>,
}

impl Node {
    /// Extracts and classifies the properties of a raw node.
    #[must_use]
    pub fn from_raw(raw: extract::RawNode<'_>) -> Self {
        let mut properties = IndexMap::new();
        for (key, value) in extract::properties(raw.body) {
            let value = Value::classify(value);
            trace!(label = raw.label, key, ?value, "classified property");
            if let Some(old) = properties.insert(key.to_owned(), value) {
                debug!(label = raw.label, key, ?old, "property overwritten");
            }
        }
        Self {
            label: raw.label.to_owned(),
            node_type: raw.node_type.to_owned(),
            properties,
        }
    }
}

/// Strips comments from `text` and returns its nodes in source order.
///
/// Text that doesn't form a node or a property is skipped.
#[must_use]
pub fn parse(text: &str) -> Vec<Node> {
    let text = strip_comments(text);
    let nodes: Vec<Node> = extract::nodes(&text).map(Node::from_raw).collect();
    debug!(count = nodes.len(), "extracted nodes");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_nodes() {
        let nodes = parse(
            "
            /* status LED */
            led0: gpio {
                pin = <13>;        // on-board
                label = \"status\";
                flags = GPIO_ACTIVE_LOW;
            };
            uart0: uart { current-speed = <115200>; };
            ",
        );

        assert_eq!(nodes.len(), 2);

        assert_eq!(nodes[0].label, "led0");
        assert_eq!(nodes[0].node_type, "gpio");
        assert_eq!(
            nodes[0].properties.iter().collect::<Vec<_>>(),
            vec![
                (&"pin".to_owned(), &Value::Integer(13)),
                (&"label".to_owned(), &Value::QuotedString("status".to_owned())),
                (&"flags".to_owned(), &Value::Token("GPIO_ACTIVE_LOW".to_owned())),
            ]
        );

        assert_eq!(nodes[1].label, "uart0");
        assert_eq!(nodes[1].properties["current-speed"], Value::Integer(115_200));
    }

    #[test]
    fn duplicate_key_keeps_position_and_last_value() {
        let nodes = parse("n: t { a = <1>; b = <2>; a = <3>; };");
        assert_eq!(
            nodes[0].properties.keys().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(nodes[0].properties["a"], Value::Integer(3));
    }

    #[test]
    fn commented_out_nodes_are_skipped() {
        let nodes = parse("/* a: t { x = <1>; }; */ // b: t { y = <2>; };\nc: t { };");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "c");
        assert!(nodes[0].properties.is_empty());
    }

    #[test]
    fn nested_braces_drop_trailing_properties() {
        let nodes = parse("soc: bus { a = <1>; { b = <2>; }; c = <3>; };");
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].properties.keys().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("/dts-v1/;\n/ { };\n").is_empty());
    }
}
