// src/actions/ini_file_op.rs
//! INI file write actions

use tracing::debug;

use super::{flag, self_healing_options, unique_name, ActionState, WemAction};

/// An INI file value write destined for the WEM import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniFileOp {
    pub name: String,
    pub description: String,
    pub state: ActionState,
    pub target_path: String,
    pub target_section_name: String,
    pub target_value_name: String,
    pub target_value: String,
    pub run_once: bool,
    pub options: String,
}

impl IniFileOp {
    /// Build an INI file operation, or `None` when an attribute-equal
    /// one (ignoring name) already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        target_path: &str,
        target_section_name: &str,
        target_value_name: &str,
        target_value: &str,
        self_healing: bool,
        run_once: bool,
        existing: &[IniFileOp],
    ) -> Option<IniFileOp> {
        let candidate = IniFileOp {
            name: name.to_string(),
            description: description.to_string(),
            state,
            target_path: target_path.to_string(),
            target_section_name: target_section_name.to_string(),
            target_value_name: target_value_name.to_string(),
            target_value: target_value.to_string(),
            run_once,
            options: self_healing_options(self_healing),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate ini file op for {target_path}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(IniFileOp { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &IniFileOp) -> bool {
        self.description == other.description
            && self.state == other.state
            && self.target_path == other.target_path
            && self.target_section_name == other.target_section_name
            && self.target_value_name == other.target_value_name
            && self.target_value == other.target_value
            && self.run_once == other.run_once
            && self.options == other.options
    }
}

impl WemAction for IniFileOp {
    const KIND: &'static str = "Ini File Operation";
    const ITEM_ELEMENT: &'static str = "VUEMIniFileOp";
    const FILE_NAME: &'static str = "VUEMIniFileOps.xml";

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("State", self.state.as_str().to_string()),
            ("ActionType", "0".to_string()),
            ("TargetPath", self.target_path.clone()),
            ("TargetSectionName", self.target_section_name.clone()),
            ("TargetValueName", self.target_value_name.clone()),
            ("TargetValue", self.target_value.clone()),
            ("RunOnce", flag(self.run_once).to_string()),
            ("Reserved01", self.options.clone()),
        ]
    }
}
