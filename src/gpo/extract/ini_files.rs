// src/gpo/extract/ini_files.rs
//! INI file preference extraction (IniFiles.xml)

use tracing::debug;

use crate::actions::{healing_mode, IniFileOp, WemAction};
use crate::convert::ConvertOptions;
use crate::gpo::document::{
    attr, child, filters_node, has_run_once_filter, item_disabled, parse, preference_action,
    raw_xml,
};

use super::{item_state, record_filters, resolve_description, FilterRecord};

/// Convert every non-delete INI preference in the document
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    ops: &mut Vec<IniFileOp>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    for item in doc
        .root_element()
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "Ini")
    {
        let Some(props) = child(item, "Properties") else {
            continue;
        };
        if preference_action(props) == "D" {
            debug!("skipping delete-flagged ini entry");
            continue;
        }
        let declared_name = attr(item, "name");
        if declared_name.is_empty() {
            continue;
        }
        let name = format!("{}{declared_name}", opts.prefix);
        let description = resolve_description("", declared_name, opts);

        let filters = filters_node(item);
        let (self_healing, run_once) =
            healing_mode(has_run_once_filter(filters), opts.self_healing);

        if let Some(op) = IniFileOp::create(
            &name,
            &description,
            item_state(item_disabled(item), opts),
            attr(props, "path"),
            attr(props, "section"),
            attr(props, "property"),
            attr(props, "value"),
            self_healing,
            run_once,
            ops,
        ) {
            if let Some(filters) = filters {
                record_filters(
                    records,
                    opts,
                    op.name(),
                    IniFileOp::KIND,
                    &[raw_xml(doc_text, filters).to_string()],
                );
            }
            ops.push(op);
        }
    }
}
