// src/gpo/extract/files.rs
//! File preference extraction (Files.xml)

use crate::actions::{healing_mode, FileSystemOp, FileSystemOpType, WemAction};
use crate::convert::ConvertOptions;
use crate::gpo::document::{
    attr, child, filters_node, has_run_once_filter, item_disabled, parse, preference_action,
    raw_xml,
};

use super::{item_state, record_filters, resolve_description, FilterRecord};

/// Convert every file preference in the document
///
/// Delete-flagged entries are kept, flipped to a delete operation and
/// suffixed " (Delete)"; everything else becomes a copy.
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    ops: &mut Vec<FileSystemOp>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    for item in doc
        .root_element()
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "File")
    {
        let Some(props) = child(item, "Properties") else {
            continue;
        };
        let declared_name = attr(item, "name");
        if declared_name.is_empty() {
            continue;
        }
        let delete = preference_action(props) == "D";
        let (op_type, source_path, suffix) = if delete {
            (FileSystemOpType::DeleteFilesFolders, "", " (Delete)")
        } else {
            (
                FileSystemOpType::CopyFilesFolders,
                attr(props, "fromPath"),
                "",
            )
        };
        let name = format!("{}{declared_name}{suffix}", opts.prefix);
        let description = resolve_description("", declared_name, opts);

        let filters = filters_node(item);
        let (self_healing, run_once) =
            healing_mode(has_run_once_filter(filters), opts.self_healing);

        if let Some(op) = FileSystemOp::create(
            &name,
            &description,
            item_state(item_disabled(item), opts),
            op_type,
            source_path,
            attr(props, "targetPath"),
            self_healing,
            run_once,
            ops,
        ) {
            if let Some(filters) = filters {
                record_filters(
                    records,
                    opts,
                    op.name(),
                    FileSystemOp::KIND,
                    &[raw_xml(doc_text, filters).to_string()],
                );
            }
            ops.push(op);
        }
    }
}
