//! Index-free entry lookup
//!
//! Every lookup is an independent scan of the document; nothing is cached
//! between calls.

use crate::document::StructuredDocument;
use crate::error::{Error, Result};
use crate::formats::Node;

/// Refuse an empty lookup key before any scanning happens.
pub(crate) fn require_key(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::InvalidArgument { name })
    } else {
        Ok(())
    }
}

/// Direct lookup of the entry keyed `id`.
pub fn find_by_id<'a>(doc: &'a StructuredDocument, id: &str) -> Option<&'a Node> {
    doc.get(id)
}

/// First entry, in source order, whose string member `field` equals `value`.
pub fn find_by_field<'a>(
    doc: &'a StructuredDocument,
    field: &str,
    value: &str,
) -> Option<(&'a str, &'a Node)> {
    doc.entries()
        .find(|(_, node)| node.str_field(field) == Some(value))
}

/// Every entry whose string member `field` equals `value`, in source order.
pub fn find_all_by_field<'a>(
    doc: &'a StructuredDocument,
    field: &'a str,
    value: &'a str,
) -> impl Iterator<Item = (&'a str, &'a Node)> {
    doc.entries()
        .filter(move |(_, node)| node.str_field(field) == Some(value))
}
