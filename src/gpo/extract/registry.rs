// src/gpo/extract/registry.rs
//! Registry preference extraction (Registry.xml)
//!
//! Registry settings nest in "Collection" groupings; the collection
//! tree is flattened first so inherited filters reach every leaf.

use tracing::debug;

use crate::actions::{
    healing_mode, RegValue, RegValueActionType, WemAction, BINARY_TYPE, DEFAULT_VALUE_NAME,
};
use crate::convert::ConvertOptions;
use crate::gpo::document::parse;
use crate::gpo::registry::{flatten, parse_registry_doc};

use super::{item_state, record_filters, resolve_description, FilterRecord};

/// Convert every registry setting in the document
///
/// Binary-typed values are excluded before any other processing;
/// delete-flagged entries are kept as delete actions with a
/// " (Delete)" name suffix.
pub fn extract(
    doc_text: &str,
    opts: &ConvertOptions,
    values: &mut Vec<RegValue>,
    records: &mut Vec<FilterRecord>,
) {
    let Some(doc) = parse(doc_text) else {
        return;
    };
    let tree = parse_registry_doc(doc_text, doc.root_element());
    for entry in flatten(std::slice::from_ref(&tree), &[]) {
        if entry.value_type == BINARY_TYPE {
            debug!(
                "skipping binary registry value {}\\{}",
                entry.key, entry.value_name
            );
            continue;
        }
        let delete = entry.action == "D";
        let (action_type, suffix) = if delete {
            (RegValueActionType::DeleteValue, " (Delete)")
        } else {
            (RegValueActionType::SetValue, "")
        };
        let display_name = if entry.value_name.is_empty() {
            DEFAULT_VALUE_NAME
        } else {
            entry.value_name.as_str()
        };
        let base_name = format!("{}\\{display_name}", entry.key);
        let name = format!("{}{base_name}{suffix}", opts.prefix);
        let description = resolve_description("", &base_name, opts);

        let (self_healing, run_once) = healing_mode(entry.run_once, opts.self_healing);

        if let Some(value) = RegValue::create(
            &name,
            &description,
            item_state(entry.disabled, opts),
            action_type,
            &entry.value_name,
            &entry.key,
            &entry.value_type,
            &entry.value_data,
            self_healing,
            run_once,
            values,
        ) {
            record_filters(records, opts, value.name(), RegValue::KIND, &entry.filters);
            values.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<RegistrySettings>
  <Registry name="Mode">
    <Properties action="U" hive="HKEY_CURRENT_USER" key="Software\Acme" name="Mode" type="REG_DWORD" value="1"/>
  </Registry>
  <Registry name="Blob">
    <Properties action="U" hive="HKEY_CURRENT_USER" key="Software\Acme" name="Blob" type="REG_BINARY" value="0011"/>
  </Registry>
  <Registry name="Old">
    <Properties action="D" hive="HKEY_CURRENT_USER" key="Software\Acme" name="Old" type="REG_SZ" value=""/>
  </Registry>
</RegistrySettings>"#;

    #[test]
    fn binary_values_never_convert() {
        let opts = ConvertOptions::default();
        let mut values = Vec::new();
        let mut records = Vec::new();
        extract(DOC, &opts, &mut values, &mut records);
        assert!(values.iter().all(|v| v.target_name != "Blob"));
    }

    #[test]
    fn delete_entries_flip_type_and_name() {
        let opts = ConvertOptions::default();
        let mut values = Vec::new();
        let mut records = Vec::new();
        extract(DOC, &opts, &mut values, &mut records);
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].action_type, RegValueActionType::DeleteValue);
        assert_eq!(values[1].name, r"HKEY_CURRENT_USER\Software\Acme\Old (Delete)");
    }

    #[test]
    fn default_value_entries_use_the_sentinel() {
        let doc = r#"<RegistrySettings>
  <Registry name="">
    <Properties action="U" hive="HKEY_CURRENT_USER" key="Software\Acme" name="" type="" value="x"/>
  </Registry>
</RegistrySettings>"#;
        let opts = ConvertOptions::default();
        let mut values = Vec::new();
        let mut records = Vec::new();
        extract(doc, &opts, &mut values, &mut records);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].target_name, DEFAULT_VALUE_NAME);
        assert_eq!(values[0].target_type, "REG_SZ");
        assert_eq!(values[0].name, r"HKEY_CURRENT_USER\Software\Acme\(Default)");
    }

    #[test]
    fn inherited_collection_filters_reach_records() {
        let doc = r#"<RegistrySettings>
  <Collection name="Grp">
    <Filters><FilterGroup name="Staff"/></Filters>
    <Registry name="A">
      <Properties action="U" hive="HKEY_CURRENT_USER" key="Software\Acme" name="A" type="REG_SZ" value="1"/>
    </Registry>
  </Collection>
</RegistrySettings>"#;
        let opts = ConvertOptions {
            export_filters: true,
            ..ConvertOptions::default()
        };
        let mut values = Vec::new();
        let mut records = Vec::new();
        extract(doc, &opts, &mut values, &mut records);
        assert_eq!(records.len(), 1);
        assert!(records[0].filter.contains("FilterGroup"));
        assert_eq!(records[0].action_type, "Registry Value");
    }
}
