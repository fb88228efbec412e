// src/actions/reg_value.rs
//! Registry value actions

use tracing::debug;

use super::{flag, self_healing_options, unique_name, ActionState, WemAction};

/// Name used when a registry preference targets a key's default value
pub const DEFAULT_VALUE_NAME: &str = "(Default)";

/// Registry type the target product cannot import
pub const BINARY_TYPE: &str = "REG_BINARY";

/// Write or delete a registry value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegValueActionType {
    SetValue,
    DeleteValue,
}

impl RegValueActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            RegValueActionType::SetValue => "0",
            RegValueActionType::DeleteValue => "1",
        }
    }
}

/// A registry value write/delete destined for the WEM import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegValue {
    pub name: String,
    pub description: String,
    pub state: ActionState,
    pub action_type: RegValueActionType,
    pub target_name: String,
    pub target_path: String,
    pub target_type: String,
    pub target_value: String,
    pub run_once: bool,
    pub options: String,
}

impl RegValue {
    /// Build a registry value action, or `None` when an
    /// attribute-equal one (ignoring name) already exists.
    ///
    /// An empty `target_name` designates the key's default value and
    /// is normalized to "(Default)" with a REG_SZ type before the
    /// dedup and uniqueness checks run. Binary-typed values must be
    /// filtered out by the caller; the import format has no binary
    /// value support.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        action_type: RegValueActionType,
        target_name: &str,
        target_path: &str,
        target_type: &str,
        target_value: &str,
        self_healing: bool,
        run_once: bool,
        existing: &[RegValue],
    ) -> Option<RegValue> {
        let (target_name, target_type) = if target_name.is_empty() {
            let ty = if target_type.is_empty() { "REG_SZ" } else { target_type };
            (DEFAULT_VALUE_NAME, ty)
        } else {
            (target_name, target_type)
        };
        let candidate = RegValue {
            name: name.to_string(),
            description: description.to_string(),
            state,
            action_type,
            target_name: target_name.to_string(),
            target_path: target_path.to_string(),
            target_type: target_type.to_string(),
            target_value: target_value.to_string(),
            run_once,
            options: self_healing_options(self_healing),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate registry value {target_path}\\{target_name}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(RegValue { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &RegValue) -> bool {
        self.description == other.description
            && self.state == other.state
            && self.action_type == other.action_type
            && self.target_name == other.target_name
            && self.target_path == other.target_path
            && self.target_type == other.target_type
            && self.target_value == other.target_value
            && self.run_once == other.run_once
            && self.options == other.options
    }
}

impl WemAction for RegValue {
    const KIND: &'static str = "Registry Value";
    const ITEM_ELEMENT: &'static str = "VUEMRegValue";
    const FILE_NAME: &'static str = "VUEMRegValues.xml";

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("State", self.state.as_str().to_string()),
            ("ActionType", self.action_type.as_str().to_string()),
            ("TargetName", self.target_name.clone()),
            ("TargetPath", self.target_path.clone()),
            ("TargetType", self.target_type.clone()),
            ("TargetValue", self.target_value.clone()),
            ("RunOnce", flag(self.run_once).to_string()),
            ("Reserved01", self.options.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_name_defaults_before_dedup() {
        let mut values = Vec::new();
        let first = RegValue::create(
            r"HKCU\Software\Acme\(Default)",
            "",
            ActionState::Enabled,
            RegValueActionType::SetValue,
            "",
            r"HKCU\Software\Acme",
            "",
            "on",
            true,
            false,
            &values,
        )
        .unwrap();
        assert_eq!(first.target_name, DEFAULT_VALUE_NAME);
        assert_eq!(first.target_type, "REG_SZ");
        values.push(first);

        // an explicit "(Default)" REG_SZ entry is the same content
        let second = RegValue::create(
            r"HKCU\Software\Acme\(Default)",
            "",
            ActionState::Enabled,
            RegValueActionType::SetValue,
            DEFAULT_VALUE_NAME,
            r"HKCU\Software\Acme",
            "REG_SZ",
            "on",
            true,
            false,
            &values,
        );
        assert!(second.is_none());
    }

    #[test]
    fn dedup_is_idempotent_over_three_calls() {
        let mut values = Vec::new();
        let make = |value: &str, existing: &[RegValue]| {
            RegValue::create(
                r"HKCU\Software\Acme\Mode",
                "",
                ActionState::Enabled,
                RegValueActionType::SetValue,
                "Mode",
                r"HKCU\Software\Acme",
                "REG_DWORD",
                value,
                true,
                false,
                existing,
            )
        };
        values.push(make("1", &values).unwrap());
        assert!(make("1", &values).is_none());
        let changed = make("2", &values).unwrap();
        values.push(changed);
        assert_eq!(values.len(), 2);
    }
}
