//! JSON → [`Node`] reading

use super::node::Node;
use crate::error::Result;

/// Parse JSON bytes into a node tree.
///
/// # Errors
/// Returns [`Error::Json`](crate::Error::Json) if the bytes are not well-formed JSON.
pub fn parse_json(data: &[u8]) -> Result<Node> {
    let node: Node = serde_json::from_slice(data)?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let node = parse_json(br#"{"Foo": {"name": "Bar"}}"#).unwrap();
        assert_eq!(node.get("Foo").and_then(|n| n.str_field("name")), Some("Bar"));
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(parse_json(b"{\"Foo\": ").unwrap_err().is_parse_error());
        assert!(parse_json(b"not json").unwrap_err().is_parse_error());
    }
}
