// src/gpo/mod.rs
//! GPO backup discovery and document access
//!
//! A backup is one `{GUID}`-named directory exported by GPMC. Each
//! carries an optional consolidated policy report (`gpreport.xml`)
//! and per-kind preference documents under a fixed sub-path layout.
//! Missing or unreadable documents are treated identically: the kind
//! is skipped for that backup.

pub mod document;
pub mod extract;
pub mod registry;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

static BACKUP_DIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{[0-9A-Fa-f]{8}(-[0-9A-Fa-f]{4}){3}-[0-9A-Fa-f]{12}\}$")
        .expect("backup directory pattern is valid")
});

/// Preference scope within one backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    Machine,
}

impl Scope {
    pub fn dir_name(self) -> &'static str {
        match self {
            Scope::User => "User",
            Scope::Machine => "Machine",
        }
    }
}

/// One exported GPO backup directory
#[derive(Debug, Clone)]
pub struct GpoBackup {
    pub dir: PathBuf,
    pub id: String,
}

impl GpoBackup {
    /// Read one preference document for this backup, if present
    ///
    /// `kind` is both the preference directory and the document stem,
    /// e.g. `Drives` resolves `.../Preferences/Drives/Drives.xml`.
    pub fn preference_doc(&self, scope: Scope, kind: &str) -> Option<String> {
        let path = self
            .dir
            .join("DomainSysvol")
            .join("GPO")
            .join(scope.dir_name())
            .join("Preferences")
            .join(kind)
            .join(format!("{kind}.xml"));
        read_xml_file(&path)
    }

    /// Read this backup's consolidated policy report, if present
    pub fn report(&self) -> Option<String> {
        read_xml_file(&self.dir.join("gpreport.xml"))
    }

    /// Folder holding this backup's user logon script files
    pub fn logon_script_dir(&self) -> PathBuf {
        self.dir
            .join("DomainSysvol")
            .join("GPO")
            .join("User")
            .join("Scripts")
            .join("Logon")
    }
}

/// Enumerate `{GUID}`-named backup directories under `root`
///
/// Directory-listing order is preserved; an empty result is a fatal
/// input error since the whole run would produce nothing.
pub fn find_backups(root: &Path) -> Result<Vec<GpoBackup>> {
    if !root.is_dir() {
        return Err(Error::BackupRootNotFound(root.to_path_buf()));
    }
    let mut backups = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if BACKUP_DIR_RE.is_match(&name) {
            backups.push(GpoBackup {
                dir: entry.path(),
                id: name,
            });
        } else {
            debug!("ignoring non-backup directory {name}");
        }
    }
    if backups.is_empty() {
        return Err(Error::NoBackupsFound(root.to_path_buf()));
    }
    Ok(backups)
}

/// Read an XML document tolerating UTF-8 and UTF-16LE encodings
///
/// GPMC writes `gpreport.xml` as UTF-16; preference documents are
/// UTF-8. Any read problem is treated the same as an absent file.
pub fn read_xml_file(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("cannot read {}: {err}", path.display());
            return None;
        }
    };
    Some(decode_xml_bytes(&bytes))
}

fn decode_xml_bytes(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let text = String::from_utf16_lossy(&units);
        // roxmltree rejects declarations naming a non-UTF-8 encoding
        return text.replacen("encoding=\"utf-16\"", "encoding=\"utf-8\"", 1).replacen(
            "encoding=\"UTF-16\"",
            "encoding=\"utf-8\"",
            1,
        );
    }
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text.into_owned(),
    }
}
