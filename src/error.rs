// src/error.rs
//! Error types for the GPO conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting GPO backups
///
/// Fatal input problems are detected eagerly, before any output is
/// produced. Per-backup document problems are never surfaced here:
/// a missing or unreadable preference document simply skips that
/// kind for that backup.
#[derive(Error, Debug)]
pub enum Error {
    /// The GPO backup root directory does not exist
    #[error("GPO backup path not found: {0}")]
    BackupRootNotFound(PathBuf),

    /// The output directory does not exist
    #[error("output path not found: {0}")]
    OutputPathNotFound(PathBuf),

    /// The backup root contains no {GUID}-named backup directories
    #[error("no GPO backups found under: {0}")]
    NoBackupsFound(PathBuf),

    /// IO error while writing output or copying script files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writer error while serializing action documents
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// CSV error while writing the filter export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
