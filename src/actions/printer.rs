// src/actions/printer.rs
//! Network printer mapping actions

use tracing::debug;

use super::{flag, healing_options, unique_name, ActionState, WemAction};

/// A printer mapping destined for the WEM import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printer {
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

impl Printer {
    /// Build a printer mapping, or `None` when an attribute-equal
    /// mapping (ignoring name) already exists in `existing`.
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        target_path: &str,
        self_healing: bool,
        run_once: bool,
        existing: &[Printer],
    ) -> Option<Printer> {
        let candidate = Printer {
            name: name.to_string(),
            description: description.to_string(),
            display_name: String::new(),
            state,
            target_path: target_path.to_string(),
            use_ext_credentials: false,
            ext_login: String::new(),
            ext_password: String::new(),
            options: healing_options(self_healing, run_once),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate printer for {target_path}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(Printer { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &Printer) -> bool {
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

impl WemAction for Printer {
    const KIND: &'static str = "Network Printer";
    const ITEM_ELEMENT: &'static str = "VUEMPrinter";
    const FILE_NAME: &'static str = "VUEMPrinters.xml";

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
