// src/gpo/document.rs
//! Helpers for navigating GPO preference and report documents
//!
//! All navigation fails soft: absent nodes and attributes read as
//! empty, matching the loosely-shaped source documents.

use roxmltree::{Document, Node};
use tracing::debug;

/// Parse a document, logging and discarding on malformed input
pub fn parse(text: &str) -> Option<Document<'_>> {
    match Document::parse(text) {
        Ok(doc) => Some(doc),
        Err(err) => {
            debug!("skipping malformed document: {err}");
            None
        }
    }
}

/// Attribute value, empty when absent
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or("")
}

/// First child element with the given local name
pub fn child<'a, 'i>(node: Node<'a, 'i>, local_name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == local_name)
}

/// Trimmed text content of a node, empty when absent
pub fn text_of<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().map(str::trim).unwrap_or("")
}

/// Raw serialized form of a node, sliced out of the source text
///
/// Used to carry filter-rule content opaquely into the filter export.
pub fn raw_xml<'a>(doc_text: &'a str, node: Node<'_, '_>) -> &'a str {
    &doc_text[node.range()]
}

/// The item's `Filters` child, if any
pub fn filters_node<'a, 'i>(item: Node<'a, 'i>) -> Option<Node<'a, 'i>> {
    child(item, "Filters")
}

/// Whether a `Filters` node carries a run-once filter
pub fn has_run_once_filter(filters: Option<Node<'_, '_>>) -> bool {
    filters
        .map(|f| {
            f.descendants()
                .any(|d| d.is_element() && d.tag_name().name() == "FilterRunOnce")
        })
        .unwrap_or(false)
}

/// Whether the preference item itself is flagged disabled
pub fn item_disabled(item: Node<'_, '_>) -> bool {
    attr(item, "disabled") == "1"
}

/// Declared preference action of an item's `Properties` node
///
/// "C"reate, "R"eplace, "U"pdate or "D"elete; update when undeclared.
pub fn preference_action<'a>(properties: Node<'a, '_>) -> &'a str {
    let action = attr(properties, "action");
    if action.is_empty() {
        "U"
    } else {
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<Drives>
  <Drive name="S:" disabled="1">
    <Properties action="D" path="\\srv\share"/>
    <Filters><FilterRunOnce/></Filters>
  </Drive>
</Drives>"#;

    #[test]
    fn navigation_reads_expected_values() {
        let doc = parse(DOC).unwrap();
        let drive = child(doc.root_element(), "Drive").unwrap();
        let props = child(drive, "Properties").unwrap();
        assert_eq!(attr(props, "path"), r"\\srv\share");
        assert_eq!(preference_action(props), "D");
        assert!(item_disabled(drive));
        assert!(has_run_once_filter(filters_node(drive)));
    }

    #[test]
    fn absent_nodes_read_soft() {
        let doc = parse("<Drives/>").unwrap();
        let root = doc.root_element();
        assert!(child(root, "Drive").is_none());
        assert_eq!(attr(root, "missing"), "");
        assert!(!has_run_once_filter(None));
    }

    #[test]
    fn raw_xml_round_trips_the_filters_node() {
        let doc = parse(DOC).unwrap();
        let drive = child(doc.root_element(), "Drive").unwrap();
        let filters = filters_node(drive).unwrap();
        assert_eq!(raw_xml(DOC, filters), "<Filters><FilterRunOnce/></Filters>");
    }

    #[test]
    fn malformed_document_is_discarded() {
        assert!(parse("<Drives><broken").is_none());
    }
}
