// tests/common/mod.rs

//! Shared test utilities for building GPO backup fixtures on disk.

use std::fs;
use std::path::{Path, PathBuf};

pub const GUID_A: &str = "{AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA}";
pub const GUID_B: &str = "{BBBBBBBB-BBBB-BBBB-BBBB-BBBBBBBBBBBB}";

/// Create one backup directory under `root` and return its path.
pub fn make_backup(root: &Path, guid: &str) -> PathBuf {
    let dir = root.join(guid);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write one preference document into a backup's user scope.
pub fn write_user_preference(backup: &Path, kind: &str, xml: &str) {
    let dir = backup
        .join("DomainSysvol")
        .join("GPO")
        .join("User")
        .join("Preferences")
        .join(kind);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{kind}.xml")), xml).unwrap();
}

/// Write a backup's consolidated policy report.
pub fn write_report(backup: &Path, xml: &str) {
    fs::write(backup.join("gpreport.xml"), xml).unwrap();
}

/// Drives.xml document with a single non-delete mapping.
pub fn single_drive_doc() -> &'static str {
    r#"<Drives clsid="{8FDDCC1A-0C3C-43cd-BD57-2C0D0226A277}">
  <Drive clsid="{935D1B74-9CB8-4e3c-9914-7DD559B7A417}" name="S:" status="S:">
    <Properties action="U" path="\\srv\share" label="Data" persistent="1" useLetter="1" letter="S"/>
  </Drive>
</Drives>"#
}
