use roxmltree::Node;
use serde_json::{Map, Value};

/// Finds the first child element with the given local tag name.
pub fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Collects every child element with the given local tag name, in document
/// order. A single occurrence and a repeated sibling list come back the same
/// way, so downstream logic never has to special-case either.
pub fn child_elements<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == name)
        .collect()
}

/// Returns the trimmed text content of the first child element with the
/// given local tag name.
pub fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_element(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
}

/// Parses optional text into a finite `f64`. Missing, non-numeric, and
/// non-finite values all come back as `None`; callers treat that as "skip
/// this field's effect" rather than aborting the parse.
pub fn parse_f64(text: Option<&str>) -> Option<f64> {
    text.and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parses an attribute into a finite `f64`, with the same lenient policy as
/// [`parse_f64`].
pub fn attr_f64(node: Node, name: &str) -> Option<f64> {
    parse_f64(node.attribute(name))
}

/// Converts an element subtree into a JSON value so consumers can hold onto
/// the full payload without a lifetime tie to the parsed document.
///
/// Attributes become `@`-prefixed keys, child elements are grouped by tag
/// name (repeats collapse into an array), and mixed text lands under
/// `#text`. An element with nothing but text becomes a plain string.
pub fn element_to_value(node: Node) -> Value {
    let mut map = Map::new();

    for attr in node.attributes() {
        map.insert(
            format!("@{}", attr.name()),
            Value::String(attr.value().to_string()),
        );
    }

    for child in node.children().filter(|n| n.is_element()) {
        let name = child.tag_name().name();
        let value = element_to_value(child);
        match map.get_mut(name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(name.to_string(), value);
            }
        }
    }

    let text = node.text().map(str::trim).filter(|t| !t.is_empty());
    if map.is_empty() {
        return Value::String(text.unwrap_or_default().to_string());
    }
    if let Some(text) = text {
        map.insert("#text".to_string(), Value::String(text.to_string()));
    }
    Value::Object(map)
}
