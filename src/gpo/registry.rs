// src/gpo/registry.rs
//! Registry preference parsing and collection flattening
//!
//! Registry preferences nest arbitrarily deep "Collection" groupings.
//! Filter rules declared on a collection scope to every leaf setting
//! beneath it, so flattening attaches the inherited filter chain onto
//! each direct child before recursing.

use roxmltree::Node;

use super::document::{attr, child, filters_node, has_run_once_filter, item_disabled, preference_action, raw_xml};

/// One registry setting, fully resolved out of its collection nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegEntry {
    /// Hive-qualified key path, e.g. `HKEY_CURRENT_USER\Software\Acme`
    pub key: String,
    pub value_name: String,
    pub value_type: String,
    pub value_data: String,
    /// Declared preference action: C/R/U/D
    pub action: String,
    pub disabled: bool,
    pub run_once: bool,
    /// Raw serialized filter nodes, inherited filters included
    pub filters: Vec<String>,
}

/// One "Collection" grouping of registry settings
#[derive(Debug, Clone, Default)]
pub struct RegCollection {
    pub filters: Vec<String>,
    pub entries: Vec<RegEntry>,
    pub children: Vec<RegCollection>,
}

/// Parse a Registry.xml document body into an owned collection tree
///
/// The root element is treated as a filterless collection so that
/// top-level `Registry` items and `Collection` groupings flatten the
/// same way.
pub fn parse_registry_doc(doc_text: &str, root: Node<'_, '_>) -> RegCollection {
    parse_collection(doc_text, root, false)
}

fn parse_collection(doc_text: &str, node: Node<'_, '_>, read_own_filters: bool) -> RegCollection {
    let mut collection = RegCollection::default();
    if read_own_filters {
        if let Some(filters) = filters_node(node) {
            collection.filters.push(raw_xml(doc_text, filters).to_string());
        }
    }
    for item in node.children().filter(|c| c.is_element()) {
        match item.tag_name().name() {
            "Registry" => {
                if let Some(entry) = parse_entry(doc_text, item) {
                    collection.entries.push(entry);
                }
            }
            "Collection" => {
                collection
                    .children
                    .push(parse_collection(doc_text, item, true));
            }
            _ => {}
        }
    }
    collection
}

fn parse_entry(doc_text: &str, item: Node<'_, '_>) -> Option<RegEntry> {
    let props = child(item, "Properties")?;
    let hive = attr(props, "hive");
    let key = attr(props, "key");
    let key = if hive.is_empty() {
        key.to_string()
    } else {
        format!("{hive}\\{key}")
    };
    let filters = filters_node(item);
    Some(RegEntry {
        key,
        value_name: attr(props, "name").to_string(),
        value_type: attr(props, "type").to_string(),
        value_data: attr(props, "value").to_string(),
        action: preference_action(props).to_string(),
        disabled: item_disabled(item),
        run_once: has_run_once_filter(filters),
        filters: filters
            .map(|f| vec![raw_xml(doc_text, f).to_string()])
            .unwrap_or_default(),
    })
}

/// Expand nested collections into a flat, depth-first entry sequence
///
/// For each collection the combined filter chain is `inherited` plus
/// the collection's own filters; when non-empty it is attached to
/// every direct entry, then passed down into nested collections.
pub fn flatten(collections: &[RegCollection], inherited: &[String]) -> Vec<RegEntry> {
    let mut flat = Vec::new();
    for collection in collections {
        let mut combined = inherited.to_vec();
        combined.extend(collection.filters.iter().cloned());
        for entry in &collection.entries {
            let mut entry = entry.clone();
            if !combined.is_empty() {
                let mut filters = combined.clone();
                filters.extend(entry.filters);
                entry.filters = filters;
            }
            flat.push(entry);
        }
        flat.extend(flatten(&collection.children, &combined));
    }
    flat
}
