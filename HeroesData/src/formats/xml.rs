//! XML → [`Node`] reading
//!
//! The root element's children are the top-level entries, keyed by their
//! `id` attribute (or their element name when there is none). Below that,
//! attributes become string members, child elements become members named
//! after the element, repeated child names collect into arrays in source
//! order, and text-only elements become strings.

use std::collections::HashSet;

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::node::Node;
use crate::error::{Error, Result};

/// An element being built while its children are read.
struct Frame {
    name: String,
    id: Option<String>,
    members: IndexMap<String, Node>,
    repeated: HashSet<String>,
    text: String,
}

impl Frame {
    /// Start an element. The root element's attributes are not entries, so
    /// they are dropped.
    fn open(start: &BytesStart<'_>, keep_attributes: bool) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut members = IndexMap::new();
        let mut id = None;

        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            if key == "id" {
                id = Some(value.clone());
            }
            if keep_attributes {
                members.insert(key, Node::String(value));
            }
        }

        Ok(Self {
            name,
            id,
            members,
            repeated: HashSet::new(),
            text: String::new(),
        })
    }

    /// Add a finished child element under `key`.
    fn push_child(&mut self, key: String, child: Node) {
        if self.repeated.contains(&key) {
            if let Some(Node::Array(items)) = self.members.get_mut(&key) {
                items.push(child);
            }
            return;
        }

        match self.members.get_mut(&key) {
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Node::Array(vec![first, child]);
                self.repeated.insert(key);
            }
            None => {
                self.members.insert(key, child);
            }
        }
    }

    fn into_node(self) -> Node {
        let text = self.text.trim();
        if self.members.is_empty() && !text.is_empty() {
            Node::String(text.to_string())
        } else {
            Node::Object(self.members)
        }
    }
}

/// Parse XML bytes into a node tree whose top level is the root element's children.
///
/// # Errors
/// Returns [`Error::Xml`] for malformed XML and [`Error::MalformedDocument`]
/// when there is no root element or elements are left unclosed.
pub fn parse_xml(data: &[u8]) -> Result<Node> {
    let mut reader = Reader::from_reader(data);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                ensure_single_root(root.as_ref())?;
                let frame = Frame::open(&e, !stack.is_empty())?;
                stack.push(frame);
            }
            Event::Empty(e) => {
                ensure_single_root(root.as_ref())?;
                let frame = Frame::open(&e, !stack.is_empty())?;
                close(&mut stack, &mut root, frame);
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| {
                    Error::MalformedDocument("unexpected closing tag".to_string())
                })?;
                close(&mut stack, &mut root, frame);
            }
            Event::Text(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(Error::MalformedDocument(format!(
            "unclosed element <{}>",
            stack.last().map(|f| f.name.as_str()).unwrap_or_default()
        )));
    }

    root.ok_or_else(|| Error::MalformedDocument("no root element".to_string()))
}

/// A document has exactly one root element.
fn ensure_single_root(root: Option<&Node>) -> Result<()> {
    if root.is_some() {
        return Err(Error::MalformedDocument(
            "content after the root element".to_string(),
        ));
    }
    Ok(())
}

/// Attach a finished element to its parent, or make it the root.
fn close(stack: &mut [Frame], root: &mut Option<Node>, frame: Frame) {
    let depth = stack.len();
    match stack.last_mut() {
        Some(parent) => {
            // Children of the root element are keyed entries.
            let key = if depth == 1 {
                frame.id.clone().unwrap_or_else(|| frame.name.clone())
            } else {
                frame.name.clone()
            };
            parent.push_child(key, frame.into_node());
        }
        None => {
            *root = Some(Node::Object(frame.members));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_children_keyed_by_id() {
        let xml = br#"<?xml version="1.0"?>
<Heroes>
    <Hero id="Abathur" hyperlinkId="Abathur">
        <name>Abathur</name>
    </Hero>
    <Hero id="Alarak"/>
</Heroes>"#;
        let node = parse_xml(xml).unwrap();
        let keys: Vec<&str> = node.members().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Abathur", "Alarak"]);

        let abathur = node.get("Abathur").unwrap();
        assert_eq!(abathur.str_field("hyperlinkId"), Some("Abathur"));
        assert_eq!(abathur.str_field("name"), Some("Abathur"));
    }

    #[test]
    fn test_repeated_children_become_arrays_in_place() {
        let xml = br#"<Units>
    <Unit id="Foo">
        <weapons nameId="A"/>
        <speed>4</speed>
        <weapons nameId="B"/>
        <weapons nameId="C"/>
    </Unit>
</Units>"#;
        let node = parse_xml(xml).unwrap();
        let unit = node.get("Foo").unwrap();
        let names: Vec<&str> = unit
            .array_field("weapons")
            .unwrap()
            .iter()
            .filter_map(|w| w.str_field("nameId"))
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let keys: Vec<&str> = unit.members().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "weapons", "speed"]);
        assert_eq!(unit.f64_field("speed"), Some(4.0));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(parse_xml(b"<Heroes><Hero></Heroes>").unwrap_err().is_parse_error());
        assert!(parse_xml(b"<Heroes>").unwrap_err().is_parse_error());
        assert!(parse_xml(b"").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_second_root_rejected() {
        for xml in [&b"<a/><b/>"[..], b"<a/><b></b>", b"<a></a><b/>"] {
            let err = parse_xml(xml).unwrap_err();
            assert!(matches!(err, Error::MalformedDocument(_)));
        }
    }

    #[test]
    fn test_lone_child_reads_as_one_item_list() {
        let xml = br#"<Units><Unit id="Foo"><weapons nameId="Only"/></Unit></Units>"#;
        let node = parse_xml(xml).unwrap();
        let weapons = node.get("Foo").unwrap().list_field("weapons");
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].str_field("nameId"), Some("Only"));
    }
}
