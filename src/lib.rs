// src/lib.rs

//! gpo2wem
//!
//! One-directional, offline converter from exported GPO backups to
//! the WEM action XML import format.
//!
//! # Architecture
//!
//! - Batch pipeline: every `{GUID}` backup directory under the batch
//!   root is processed in sequence, per-kind action collections
//!   accumulating across the whole batch
//! - Content dedup: attribute-equal actions (name aside) are created
//!   once, later occurrences silently suppressed
//! - Name uniqueness: display names are unique per kind, enforced at
//!   construction time with " (n)" suffixes
//! - Offline only: output is a set of XML documents the operator
//!   imports by hand; the target system is never contacted

pub mod actions;
pub mod convert;
mod error;
pub mod gpo;
pub mod output;

pub use actions::{
    ActionState, EnvVariable, ExternalTask, FileSystemOp, FileSystemOpType, IniFileOp, NetDrive,
    Printer, RegValue, RegValueActionType, UserDsn, VariableType, WemAction,
};
pub use convert::{ConvertOptions, ConvertSummary, GpoConverter};
pub use error::{Error, Result};
pub use gpo::extract::FilterRecord;
pub use gpo::{find_backups, GpoBackup, Scope};
