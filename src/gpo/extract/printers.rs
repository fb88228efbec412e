// src/gpo/extract/printers.rs
//! Printer preference extraction (Printers.xml)
//!
//! Only shared printer mappings convert; local and port printers have
//! no counterpart in the target product. Centrally deployed printers
//! come from the policy report instead, see the `report` module.

use tracing::debug;

use crate::actions::{healing_mode, Printer, WemAction};
use crate::convert::ConvertOptions;
use crate::gpo::document::{
    attr, child, filters_node, has_run_once_filter, item_disabled, parse, preference_action,
    raw_xml,
};

use super::{item_state, record_filters, resolve_description, FilterRecord};

/// Convert every non-delete shared printer mapping in the document
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    printers: &mut Vec<Printer>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    for item in doc
        .root_element()
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "SharedPrinter")
    {
        let Some(props) = child(item, "Properties") else {
            continue;
        };
        if preference_action(props) == "D" {
            debug!("skipping delete-flagged printer mapping");
            continue;
        }
        let path = attr(props, "path");
        if path.is_empty() {
            continue;
        }
        let name = format!("{}{path}", opts.prefix);
        let description = resolve_description(attr(props, "comment"), path, opts);

        let filters = filters_node(item);
        let (self_healing, run_once) =
            healing_mode(has_run_once_filter(filters), opts.self_healing);

        if let Some(printer) = Printer::create(
            &name,
            &description,
            item_state(item_disabled(item), opts),
            path,
            self_healing,
            run_once,
            printers,
        ) {
            if let Some(filters) = filters {
                record_filters(
                    records,
                    opts,
                    printer.name(),
                    Printer::KIND,
                    &[raw_xml(doc_text, filters).to_string()],
                );
            }
            printers.push(printer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<Printers>
  <SharedPrinter name="hp-floor2">
    <Properties action="U" path="\\printsrv\hp-floor2" comment="Second floor HP"/>
  </SharedPrinter>
  <LocalPrinter name="local">
    <Properties action="C" path="LPT1:"/>
  </LocalPrinter>
</Printers>"#;

    #[test]
    fn only_shared_printers_convert() {
        let opts = ConvertOptions::default();
        let mut printers = Vec::new();
        let mut records = Vec::new();
        extract(DOC, &opts, &mut printers, &mut records);
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].name, r"\\printsrv\hp-floor2");
        assert_eq!(printers[0].description, "Second floor HP");
    }
}
