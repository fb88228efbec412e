// src/gpo/extract/drives.rs
//! Drive mapping preference extraction (Drives.xml)

use tracing::debug;

use crate::actions::{healing_mode, NetDrive, WemAction};
use crate::convert::ConvertOptions;
use crate::gpo::document::{
    attr, child, filters_node, has_run_once_filter, item_disabled, parse, preference_action,
    raw_xml,
};

use super::{item_state, record_filters, resolve_description, FilterRecord};

/// Convert every non-delete drive mapping in the document
///
/// Action names key off the UNC target path, with the drive label as
/// an optional suffix.
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    drives: &mut Vec<NetDrive>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    for item in doc
        .root_element()
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "Drive")
    {
        let Some(props) = child(item, "Properties") else {
            continue;
        };
        if preference_action(props) == "D" {
            debug!("skipping delete-flagged drive mapping");
            continue;
        }
        let path = attr(props, "path");
        if path.is_empty() {
            continue;
        }
        let label = attr(props, "label");
        let base_name = if label.is_empty() {
            path.to_string()
        } else {
            format!("{path} ({label})")
        };
        let name = format!("{}{base_name}", opts.prefix);
        let description = resolve_description("", path, opts);

        let filters = filters_node(item);
        let (self_healing, run_once) =
            healing_mode(has_run_once_filter(filters), opts.self_healing);

        if let Some(drive) = NetDrive::create(
            &name,
            &description,
            label,
            item_state(item_disabled(item), opts),
            path,
            self_healing,
            run_once,
            drives,
        ) {
            if let Some(filters) = filters {
                record_filters(
                    records,
                    opts,
                    drive.name(),
                    NetDrive::KIND,
                    &[raw_xml(doc_text, filters).to_string()],
                );
            }
            drives.push(drive);
        }
    }
}
