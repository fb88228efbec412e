// src/actions/net_drive.rs
//! Network drive mapping actions

use tracing::debug;

use super::{flag, healing_options, unique_name, ActionState, WemAction};

/// A drive mapping destined for the WEM import document
///
/// Field order matches the serialized element order. The healing
/// flags live in the embedded advanced-option blob, so two mappings
/// that differ only in self-healing are distinct, non-deduped actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetDrive {
    pub name: String,
    pub description: String,
    pub display_name: String,
    pub state: ActionState,
    pub target_path: String,
    pub use_ext_credentials: bool,
    pub ext_login: String,
    pub ext_password: String,
    pub options: String,
}

impl NetDrive {
    /// Build a drive mapping, or `None` when an attribute-equal
    /// mapping (ignoring name) already exists in `existing`.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: &str,
        description: &str,
        display_name: &str,
        state: ActionState,
        target_path: &str,
        self_healing: bool,
        run_once: bool,
        existing: &[NetDrive],
    ) -> Option<NetDrive> {
        let candidate = NetDrive {
            name: name.to_string(),
            description: description.to_string(),
            display_name: display_name.to_string(),
            state,
            target_path: target_path.to_string(),
            use_ext_credentials: false,
            ext_login: String::new(),
            ext_password: String::new(),
            options: healing_options(self_healing, run_once),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate net drive for {target_path}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(NetDrive { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &NetDrive) -> bool {
        self.description == other.description
            && self.display_name == other.display_name
            && self.state == other.state
            && self.target_path == other.target_path
            && self.use_ext_credentials == other.use_ext_credentials
            && self.ext_login == other.ext_login
            && self.ext_password == other.ext_password
            && self.options == other.options
    }
}

impl WemAction for NetDrive {
    const KIND: &'static str = "Net Drive";
    const ITEM_ELEMENT: &'static str = "VUEMNetDrive";
    const FILE_NAME: &'static str = "VUEMNetDrives.xml";

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("DisplayName", self.display_name.clone()),
            ("State", self.state.as_str().to_string()),
            ("ActionType", "0".to_string()),
            ("TargetPath", self.target_path.clone()),
            ("UseExtCredentials", flag(self.use_ext_credentials).to_string()),
            ("ExtLogin", self.ext_login.clone()),
            ("ExtPassword", self.ext_password.clone()),
            ("Reserved01", self.options.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_default(existing: &[NetDrive]) -> Option<NetDrive> {
        NetDrive::create(
            r"\\srv\share (Data)",
            "",
            "Data",
            ActionState::Enabled,
            r"\\srv\share",
            true,
            false,
            existing,
        )
    }

    #[test]
    fn duplicate_content_is_suppressed() {
        let mut drives = Vec::new();
        drives.push(create_default(&drives).unwrap());
        assert!(create_default(&drives).is_none());
        assert_eq!(drives.len(), 1);
    }

    #[test]
    fn changed_field_survives_dedup() {
        let mut drives = Vec::new();
        drives.push(create_default(&drives).unwrap());
        let other = NetDrive::create(
            r"\\srv\share (Data)",
            "",
            "Archive",
            ActionState::Enabled,
            r"\\srv\share",
            true,
            false,
            &drives,
        )
        .unwrap();
        // same candidate name, so the survivor picks up a suffix
        assert_eq!(other.name, r"\\srv\share (Data) (2)");
        drives.push(other);
        assert_eq!(drives.len(), 2);
    }

    #[test]
    fn self_healing_difference_is_not_a_duplicate() {
        let mut drives = Vec::new();
        drives.push(create_default(&drives).unwrap());
        let other = NetDrive::create(
            r"\\srv\share (Data)",
            "",
            "Data",
            ActionState::Enabled,
            r"\\srv\share",
            false,
            true,
            &drives,
        );
        assert!(other.is_some());
    }

    #[test]
    fn state_participates_in_content_equality() {
        let mut drives = Vec::new();
        drives.push(create_default(&drives).unwrap());
        let disabled = NetDrive::create(
            r"\\srv\share (Data)",
            "",
            "Data",
            ActionState::Disabled,
            r"\\srv\share",
            true,
            false,
            &drives,
        );
        assert!(disabled.is_some());
    }
}
