//! Structured document node
//!
//! A parsed document is a tree of [`Node`] values. Objects keep their
//! members in source order, which matters for weapon lists, armor sets and
//! ability buckets.
//!
//! All accessors are best-effort: an absent member, or a member of the
//! wrong shape, yields `None` rather than an error. Text that spells a
//! number or a boolean is accepted as that scalar, since XML documents
//! carry everything as text.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::error::{Error, Result};

/// A node in a parsed structured document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// An explicit null, or a value that could not be represented.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// Any number. Integers up to 2^53 round-trip exactly.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of nodes.
    Array(Vec<Node>),
    /// Named members in source order.
    Object(IndexMap<String, Node>),
}

impl Node {
    /// Look up a member of an object node.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Object(members) => members.get(name),
            _ => None,
        }
    }

    /// Whether this node is an object with a member called `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            Node::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Integer view of a number. Fractional numbers are rejected.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            Node::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            Node::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Node::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Named members of an object node, in source order. Empty for other nodes.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.as_object()
            .into_iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Items of an array node, in source order. Empty for other nodes.
    pub fn items(&self) -> impl Iterator<Item = &Node> {
        self.as_array().unwrap_or_default().iter()
    }

    /// List view of a node: an array's items, or a lone object as a
    /// one-item list. XML only produces arrays for repeated elements, so a
    /// single `<weapons/>` arrives as an object.
    #[must_use]
    pub fn as_list(&self) -> &[Node] {
        match self {
            Node::Array(items) => items,
            Node::Object(_) => std::slice::from_ref(self),
            _ => &[],
        }
    }

    // -------------------------------------------------------------------------
    // Typed member access
    // -------------------------------------------------------------------------

    /// Typed extraction of a member; `None` if absent or of another type.
    #[must_use]
    pub fn field<T: FromNode>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(T::from_node)
    }

    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Node::as_str)
    }

    #[must_use]
    pub fn string_field(&self, name: &str) -> Option<String> {
        self.str_field(name).map(ToString::to_string)
    }

    #[must_use]
    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Node::as_f64)
    }

    #[must_use]
    pub fn i64_field(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Node::as_i64)
    }

    #[must_use]
    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Node::as_bool)
    }

    /// Permissive date extraction; anything unparsable is simply `None`.
    #[must_use]
    pub fn date_field(&self, name: &str) -> Option<NaiveDate> {
        self.str_field(name).and_then(parse_date)
    }

    #[must_use]
    pub fn object_field(&self, name: &str) -> Option<&Node> {
        self.get(name).filter(|n| matches!(n, Node::Object(_)))
    }

    #[must_use]
    pub fn array_field(&self, name: &str) -> Option<&[Node]> {
        self.get(name).and_then(Node::as_array)
    }

    /// Items of a list member; see [`as_list`](Self::as_list). Empty when
    /// absent or not a list of objects.
    #[must_use]
    pub fn list_field(&self, name: &str) -> &[Node] {
        self.get(name).map(Node::as_list).unwrap_or_default()
    }

    /// The string items of an array member. Non-string items are skipped,
    /// and a lone string is a one-item list.
    #[must_use]
    pub fn string_list(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(Node::String(s)) => vec![s.clone()],
            _ => self
                .array_field(name)
                .unwrap_or_default()
                .iter()
                .filter_map(Node::as_str)
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Typed extraction of a member that must be present.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] if the member is absent or of another type.
    pub fn require<T: FromNode>(&self, field: &'static str, parent: &str) -> Result<T> {
        self.field(field).ok_or_else(|| Error::MissingField {
            field,
            parent: parent.to_string(),
        })
    }
}

/// Parse the date formats found in data files, ignoring any time component.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date_part = text.split(['T', ' ']).next().unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%m/%d/%Y"))
        .ok()
}

/// Best-effort conversion out of a [`Node`].
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Option<Self>;
}

impl FromNode for String {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_str().map(ToString::to_string)
    }
}

impl FromNode for f64 {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_f64()
    }
}

impl FromNode for i64 {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_i64()
    }
}

impl FromNode for i32 {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_i64().and_then(|v| i32::try_from(v).ok())
    }
}

impl FromNode for u32 {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_i64().and_then(|v| u32::try_from(v).ok())
    }
}

impl FromNode for bool {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_bool()
    }
}

impl FromNode for NaiveDate {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_str().and_then(parse_date)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Node::Null, Node::Number),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(members) => {
                Node::Object(members.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

// Deserialize straight into the tree so large data files are not
// materialized twice.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any structured value")
    }

    fn visit_unit<E>(self) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::Number(v))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Node, E>
    where
        E: serde::de::Error,
    {
        Ok(Node::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            members.insert(key, value);
        }
        Ok(Node::Object(members))
    }
}
