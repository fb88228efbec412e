// src/gpo/extract/mod.rs
//! Per-kind preference extraction
//!
//! One module per source document shape. Every extractor reads its
//! document, applies the shared conversion rules (delete handling,
//! prefixing, description fallback, RunOnce/SelfHealing inversion)
//! and appends surviving actions to the caller-supplied collection.
//! State is threaded explicitly so extraction order and cross-backup
//! dedup stay deterministic and testable.

pub mod datasources;
pub mod drives;
pub mod env_variables;
pub mod files;
pub mod folders;
pub mod ini_files;
pub mod printers;
pub mod registry;
pub mod report;

use crate::actions::ActionState;
use crate::convert::ConvertOptions;

/// One exported filter record: the action it belongs to, its kind
/// tag, and the opaque serialized filter-rule content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRecord {
    pub name: String,
    pub action_type: String,
    pub filter: String,
}

/// Record an action's source filters for export, deduplicating on the
/// full (name, kind, filter) triple. No-op unless export is enabled.
pub fn record_filters(
    records: &mut Vec<FilterRecord>,
    opts: &ConvertOptions,
    name: &str,
    kind: &str,
    filters: &[String],
) {
    if !opts.export_filters {
        return;
    }
    for filter in filters {
        let record = FilterRecord {
            name: name.to_string(),
            action_type: kind.to_string(),
            filter: filter.clone(),
        };
        if !records.contains(&record) {
            records.push(record);
        }
    }
}

/// Resolve an action's state from the item's disabled flag and the
/// global disable override.
pub fn item_state(item_disabled: bool, opts: &ConvertOptions) -> ActionState {
    if item_disabled || opts.disable {
        ActionState::Disabled
    } else {
        ActionState::Enabled
    }
}

/// Apply the description fallback: an empty source description takes
/// the given fallback value, but only when the option is enabled.
pub fn resolve_description(source: &str, fallback: &str, opts: &ConvertOptions) -> String {
    if source.is_empty() && opts.use_name_for_description {
        fallback.to_string()
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_records_dedup_on_full_triple() {
        let opts = ConvertOptions {
            export_filters: true,
            ..ConvertOptions::default()
        };
        let mut records = Vec::new();
        let filters = vec!["<Filters/>".to_string()];
        record_filters(&mut records, &opts, "A", "Net Drive", &filters);
        record_filters(&mut records, &opts, "A", "Net Drive", &filters);
        record_filters(&mut records, &opts, "B", "Net Drive", &filters);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn filter_records_require_export_mode() {
        let opts = ConvertOptions::default();
        let mut records = Vec::new();
        record_filters(
            &mut records,
            &opts,
            "A",
            "Net Drive",
            &["<Filters/>".to_string()],
        );
        assert!(records.is_empty());
    }

    #[test]
    fn description_fallback_is_opt_in() {
        let mut opts = ConvertOptions::default();
        assert_eq!(resolve_description("", "name", &opts), "");
        assert_eq!(resolve_description("set", "name", &opts), "set");
        opts.use_name_for_description = true;
        assert_eq!(resolve_description("", "name", &opts), "name");
        assert_eq!(resolve_description("set", "name", &opts), "set");
    }
}
