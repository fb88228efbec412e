// src/actions/env_variable.rs
//! Environment variable actions

use tracing::debug;

use super::{exec_order_options, unique_name, ActionState, WemAction};

/// Scope of an environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    User,
    System,
}

impl VariableType {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableType::User => "User",
            VariableType::System => "System",
        }
    }
}

/// An environment variable destined for the WEM import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVariable {
    pub name: String,
    pub description: String,
    pub state: ActionState,
    pub variable_name: String,
    pub variable_value: String,
    pub variable_type: VariableType,
    pub options: String,
}

impl EnvVariable {
    /// Build an environment variable action, or `None` when an
    /// attribute-equal one (ignoring name) already exists.
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        variable_name: &str,
        variable_value: &str,
        variable_type: VariableType,
        existing: &[EnvVariable],
    ) -> Option<EnvVariable> {
        let candidate = EnvVariable {
            name: name.to_string(),
            description: description.to_string(),
            state,
            variable_name: variable_name.to_string(),
            variable_value: variable_value.to_string(),
            variable_type,
            options: exec_order_options(),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate environment variable {variable_name}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(EnvVariable { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &EnvVariable) -> bool {
        self.description == other.description
            && self.state == other.state
            && self.variable_name == other.variable_name
            && self.variable_value == other.variable_value
            && self.variable_type == other.variable_type
            && self.options == other.options
    }
}

impl WemAction for EnvVariable {
    const KIND: &'static str = "Environment Variable";
    const ITEM_ELEMENT: &'static str = "VUEMEnvVariable";
    const FILE_NAME: &'static str = "VUEMEnvVariables.xml";

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("State", self.state.as_str().to_string()),
            ("ActionType", "0".to_string()),
            ("VariableName", self.variable_name.clone()),
            ("VariableValue", self.variable_value.clone()),
            ("VariableType", self.variable_type.as_str().to_string()),
            ("Reserved01", self.options.clone()),
        ]
    }
}
