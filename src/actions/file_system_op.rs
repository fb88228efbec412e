// src/actions/file_system_op.rs
//! File system operation actions (copy, delete, create directory)

use tracing::debug;

use super::{flag, self_healing_options, unique_name, ActionState, WemAction};

/// Operation performed by a file system action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSystemOpType {
    CopyFilesFolders,
    DeleteFilesFolders,
    CreateDirectory,
}

impl FileSystemOpType {
    pub fn as_str(self) -> &'static str {
        match self {
            FileSystemOpType::CopyFilesFolders => "0",
            FileSystemOpType::DeleteFilesFolders => "1",
            FileSystemOpType::CreateDirectory => "5",
        }
    }
}

/// A file system operation destined for the WEM import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemOp {
    pub name: String,
    pub description: String,
    pub state: ActionState,
    pub action_type: FileSystemOpType,
    pub source_path: String,
    pub target_path: String,
    pub run_once: bool,
    pub options: String,
}

impl FileSystemOp {
    /// Build a file system operation, or `None` when an
    /// attribute-equal one (ignoring name) already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: &str,
        description: &str,
        state: ActionState,
        action_type: FileSystemOpType,
        source_path: &str,
        target_path: &str,
        self_healing: bool,
        run_once: bool,
        existing: &[FileSystemOp],
    ) -> Option<FileSystemOp> {
        let candidate = FileSystemOp {
            name: name.to_string(),
            description: description.to_string(),
            state,
            action_type,
            source_path: source_path.to_string(),
            target_path: target_path.to_string(),
            run_once,
            options: self_healing_options(self_healing),
        };
        if existing.iter().any(|e| e.content_eq(&candidate)) {
            debug!("suppressing duplicate file system op for {target_path}");
            return None;
        }
        let name = unique_name(existing, &candidate.name);
        Some(FileSystemOp { name, ..candidate })
    }

    /// Equality over everything except the name
    pub fn content_eq(&self, other: &FileSystemOp) -> bool {
        self.description == other.description
            && self.state == other.state
            && self.action_type == other.action_type
            && self.source_path == other.source_path
            && self.target_path == other.target_path
            && self.run_once == other.run_once
            && self.options == other.options
    }
}

impl WemAction for FileSystemOp {
    const KIND: &'static str = "File System Operation";
    const ITEM_ELEMENT: &'static str = "VUEMFileSystemOp";
    const FILE_NAME: &'static str = "VUEMFileSystemOps.xml";

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("State", self.state.as_str().to_string()),
            ("ActionType", self.action_type.as_str().to_string()),
            ("SourcePath", self.source_path.clone()),
            ("TargetPath", self.target_path.clone()),
            ("RunOnce", flag(self.run_once).to_string()),
            ("Reserved01", self.options.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_type_distinguishes_actions() {
        let mut ops = Vec::new();
        ops.push(
            FileSystemOp::create(
                "profile.ini",
                "",
                ActionState::Enabled,
                FileSystemOpType::CopyFilesFolders,
                r"\\srv\cfg\profile.ini",
                r"C:\Users\profile.ini",
                true,
                false,
                &ops,
            )
            .unwrap(),
        );
        let delete = FileSystemOp::create(
            "profile.ini",
            "",
            ActionState::Enabled,
            FileSystemOpType::DeleteFilesFolders,
            r"\\srv\cfg\profile.ini",
            r"C:\Users\profile.ini",
            true,
            false,
            &ops,
        );
        assert!(delete.is_some());
    }
}
