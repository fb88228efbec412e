// src/actions/user_dsn.rs
//! ODBC user data source actions

use tracing::debug;

use super::{flag, self_healing_options, unique_name, ActionState, WemAction};

/// A SQL Server user DSN destined for the WEM import document
///
/// Both GPO "User DSN" and "System DSN" preferences land here; the
/// target product only manages per-user data sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDsn {
    pub name: String,
    pub description: String,
    pub state: ActionState,
    pub target_name: String,
    pub target_driver_name: String,
    pub target_server_name: String,
    pub target_database_name: String,
    pub use_ext_credentials: bool,
    pub ext_login: String,
    pub ext_password: String,
    pub run_once: bool,
    pub options: String,
}

impl UserDsn {
    /// Build a user DSN action, or `None` when an attribute-equal
    /// one (ignoring name) already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        target_name: &str,
        target_driver_name: &str,
        target_server_name: &str,
        target_database_name: &str,
        self_healing: bool,
        run_once: bool,
        existing: &[UserDsn],
    ) -> Option<UserDsn> {
        let candidate = UserDsn {
            name: name.to_string(),
            description: description.to_string(),
            state,
            target_name: target_name.to_string(),
            target_driver_name: target_driver_name.to_string(),
            target_server_name: target_server_name.to_string(),
            target_database_name: target_database_name.to_string(),
            use_ext_credentials: false,
            ext_login: String::new(),
            ext_password: String::new(),
            run_once,
            options: self_healing_options(self_healing),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate user DSN {target_name}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(UserDsn { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &UserDsn) -> bool {
        self.description == other.description
            && self.state == other.state
            && self.target_name == other.target_name
            && self.target_driver_name == other.target_driver_name
            && self.target_server_name == other.target_server_name
            && self.target_database_name == other.target_database_name
            && self.use_ext_credentials == other.use_ext_credentials
            && self.ext_login == other.ext_login
            && self.ext_password == other.ext_password
            && self.run_once == other.run_once
            && self.options == other.options
    }
}

impl WemAction for UserDsn {
    const KIND: &'static str = "User DSN";
    const ITEM_ELEMENT: &'static str = "VUEMUserDSN";
    const FILE_NAME: &'static str = "VUEMUserDSNs.xml";

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("State", self.state.as_str().to_string()),
            ("ActionType", "0".to_string()),
            ("TargetName", self.target_name.clone()),
            ("TargetDriverName", self.target_driver_name.clone()),
            ("TargetServerName", self.target_server_name.clone()),
            ("TargetDatabaseName", self.target_database_name.clone()),
            ("UseExtCredentials", flag(self.use_ext_credentials).to_string()),
            ("ExtLogin", self.ext_login.clone()),
            ("ExtPassword", self.ext_password.clone()),
            ("RunOnce", flag(self.run_once).to_string()),
            ("Reserved01", self.options.clone()),
        ]
    }
}
