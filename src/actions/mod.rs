// src/actions/mod.rs
//! WEM action data model
//!
//! One struct per action kind, each with a `create` constructor that
//! applies the kind's defaults, suppresses content-duplicates against
//! the in-progress collection, and resolves a collection-unique name.
//! Booleans are real types internally and only become the "0"/"1"
//! literals of the import schema at serialization time.

mod env_variable;
mod external_task;
mod file_system_op;
mod ini_file_op;
mod net_drive;
mod printer;
mod reg_value;
mod user_dsn;

pub use env_variable::{EnvVariable, VariableType};
pub use external_task::ExternalTask;
pub use file_system_op::{FileSystemOp, FileSystemOpType};
pub use ini_file_op::IniFileOp;
pub use net_drive::NetDrive;
pub use printer::Printer;
pub use reg_value::{RegValue, RegValueActionType, BINARY_TYPE, DEFAULT_VALUE_NAME};
pub use user_dsn::UserDsn;

/// Enabled/disabled state of an action, serialized as "1"/"0"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Enabled,
    Disabled,
}

impl ActionState {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionState::Enabled => "1",
            ActionState::Disabled => "0",
        }
    }
}

/// "1"/"0" literal for a boolean field
pub fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Common shape shared by every action kind
///
/// `fields` returns the serialized fields in their declared order;
/// bookkeeping fields used only during accumulation are excluded.
pub trait WemAction {
    /// Human-readable kind tag, used in filter export records
    const KIND: &'static str;
    /// Element name of one action in the import document
    const ITEM_ELEMENT: &'static str;
    /// File name of the per-kind output document
    const FILE_NAME: &'static str;

    fn name(&self) -> &str;
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Resolve a collection-unique name by appending " (k)" suffixes
///
/// Checks against the current snapshot of the collection, so callers
/// must insert each produced action before requesting the next name.
pub fn unique_name<A: WemAction>(existing: &[A], candidate: &str) -> String {
    let taken = |name: &str| existing.iter().any(|a| a.name() == name);
    if !taken(candidate) {
        return candidate.to_string();
    }
    let mut k = 2;
    loop {
        let attempt = format!("{candidate} ({k})");
        if !taken(&attempt) {
            return attempt;
        }
        k += 1;
    }
}

/// Resolve the RunOnce/SelfHealing pair for a converted preference
///
/// "Run once at logon" and "continuously self-heal" are mutually
/// exclusive in the target product: a source run-once filter wins
/// unless self-healing was forced globally. Returns
/// `(self_healing, run_once)`.
pub fn healing_mode(run_once_filter: bool, force_self_healing: bool) -> (bool, bool) {
    if run_once_filter && !force_self_healing {
        (false, true)
    } else {
        (true, false)
    }
}

/// Serialize a list of advanced options into the embedded blob string
///
/// The import schema carries per-action advanced options as one
/// escaped XML document inside a single field, so the blob takes part
/// in content-duplicate comparison like any other field.
pub fn advanced_options(pairs: &[(&str, &str)]) -> String {
    let mut blob = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <ArrayOfVUEMActionAdvancedOption \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
    );
    for (name, value) in pairs {
        blob.push_str("<VUEMActionAdvancedOption><Name>");
        blob.push_str(name);
        blob.push_str("</Name><Value>");
        blob.push_str(value);
        blob.push_str("</Value></VUEMActionAdvancedOption>");
    }
    blob.push_str("</ArrayOfVUEMActionAdvancedOption>");
    blob
}

/// Advanced-option blob for kinds that embed both healing flags
pub fn healing_options(self_healing: bool, run_once: bool) -> String {
    advanced_options(&[
        ("SelfHealingEnabled", flag(self_healing)),
        ("RunOnce", flag(run_once)),
    ])
}

/// Advanced-option blob for kinds with a dedicated RunOnce field
pub fn self_healing_options(self_healing: bool) -> String {
    advanced_options(&[("SelfHealingEnabled", flag(self_healing))])
}

/// Advanced-option blob for kinds without healing semantics
pub fn exec_order_options() -> String {
    advanced_options(&[("ExecutionOrder", "0")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_name_returns_candidate_when_free() {
        let existing: Vec<NetDrive> = Vec::new();
        assert_eq!(unique_name(&existing, "H:"), "H:");
    }

    #[test]
    fn unique_name_appends_running_suffix() {
        let mut drives: Vec<NetDrive> = Vec::new();
        let names = [r"\\srv\share", r"\\srv\share", r"\\srv\share"];
        let mut produced = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let drive = NetDrive::create(
                name,
                "",
                &format!("D{i}"),
                ActionState::Enabled,
                r"\\srv\share",
                true,
                false,
                &drives,
            )
            .unwrap();
            produced.push(drive.name().to_string());
            drives.push(drive);
        }
        assert_eq!(
            produced,
            [r"\\srv\share", r"\\srv\share (2)", r"\\srv\share (3)"]
        );
    }

    #[test]
    fn healing_mode_inverts_on_run_once_filter() {
        assert_eq!(healing_mode(true, false), (false, true));
        assert_eq!(healing_mode(true, true), (true, false));
        assert_eq!(healing_mode(false, false), (true, false));
        assert_eq!(healing_mode(false, true), (true, false));
    }

    #[test]
    fn advanced_options_blob_shape() {
        let blob = self_healing_options(true);
        assert!(blob.contains("<Name>SelfHealingEnabled</Name><Value>1</Value>"));
        assert!(blob.starts_with("<?xml"));
        assert!(blob.ends_with("</ArrayOfVUEMActionAdvancedOption>"));
    }
}
