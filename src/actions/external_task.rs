// src/actions/external_task.rs
//! External task actions (logon programs and scripts)

use tracing::debug;

use super::{exec_order_options, flag, unique_name, ActionState, WemAction};

/// Fixed timeout applied to every converted task, in seconds
const TASK_TIMEOUT_SECS: u32 = 30;

/// A program or script run destined for the WEM import document
///
/// `needs_file_location` marks embedded logon scripts whose files
/// still have to be relocated by the operator; it is bookkeeping for
/// the accumulation phase and is neither serialized nor compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTask {
    pub name: String,
    pub description: String,
    pub state: ActionState,
    pub target_path: String,
    pub target_args: String,
    pub run_hidden: bool,
    pub wait_for_finish: bool,
    pub timeout: u32,
    pub run_once: bool,
    pub options: String,
    pub needs_file_location: bool,
}

impl ExternalTask {
    /// Build an external task, or `None` when an attribute-equal one
    /// (ignoring name) already exists. Timeout, wait and visibility
    /// always take the product defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        target_path: &str,
        target_args: &str,
        run_once: bool,
        needs_file_location: bool,
        existing: &[ExternalTask],
    ) -> Option<ExternalTask> {
        let candidate = ExternalTask {
            name: name.to_string(),
            description: description.to_string(),
            state,
            target_path: target_path.to_string(),
            target_args: target_args.to_string(),
            run_hidden: true,
            wait_for_finish: false,
            timeout: TASK_TIMEOUT_SECS,
            run_once,
            options: exec_order_options(),
            needs_file_location,
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate external task for {target_path}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(ExternalTask { name, ..candidate })
    }

    /// Equality over everything except the name and bookkeeping
    pub fn content_eq(&self, other: &ExternalTask) -> bool {
        self.description == other.description
            && self.state == other.state
            && self.target_path == other.target_path
            && self.target_args == other.target_args
            && self.run_hidden == other.run_hidden
            && self.wait_for_finish == other.wait_for_finish
            && self.timeout == other.timeout
            && self.run_once == other.run_once
            && self.options == other.options
    }
}

impl WemAction for ExternalTask {
    const KIND: &'static str = "External Task";
    const ITEM_ELEMENT: &'static str = "VUEMExtTask";
    const FILE_NAME: &'static str = "VUEMExtTasks.xml";

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
            ("TargetArgs", self.target_args.clone()),
            ("RunHidden", flag(self.run_hidden).to_string()),
            ("WaitForFinish", flag(self.wait_for_finish).to_string()),
            ("TimeOut", self.timeout.to_string()),
            ("ExecOrder", "0".to_string()),
            ("RunOnce", flag(self.run_once).to_string()),
            ("Reserved01", self.options.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fixed() {
        let task = ExternalTask::create(
            "logon.cmd",
            "",
            ActionState::Enabled,
            "logon.cmd",
            "/quiet",
            true,
            false,
            &[],
        )
        .unwrap();
        assert_eq!(task.timeout, 30);
        assert!(task.run_hidden);
        assert!(!task.wait_for_finish);
    }

    #[test]
    fn bookkeeping_flag_does_not_break_dedup() {
        let mut tasks = Vec::new();
        tasks.push(
            ExternalTask::create(
                "setup.bat",
                "",
                ActionState::Enabled,
                "setup.bat",
                "",
                false,
                true,
                &tasks,
            )
            .unwrap(),
        );
        // identical task without the bookkeeping mark is still a duplicate
        assert!(ExternalTask::create(
            "setup.bat",
            "",
            ActionState::Enabled,
            "setup.bat",
            "",
            false,
            false,
            &tasks,
        )
        .is_none());
    }

    #[test]
    fn bookkeeping_flag_is_not_serialized() {
        let task = ExternalTask::create(
            "setup.bat",
            "",
            ActionState::Enabled,
            "setup.bat",
            "",
            false,
            true,
            &[],
        )
        .unwrap();
        assert!(task
            .fields()
            .iter()
            .all(|(name, _)| *name != "NeedsFileLocation"));
    }
}
