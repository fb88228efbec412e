// src/convert/mod.rs
//! GPO backup conversion pipeline
//!
//! Walks every backup under the batch root, runs the per-kind
//! extractors in a fixed order against per-kind collections that
//! persist across the whole batch (which is what makes cross-backup
//! dedup and name uniqueness work), then serializes each non-empty
//! collection into its import document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::actions::{
    EnvVariable, ExternalTask, FileSystemOp, IniFileOp, NetDrive, Printer, RegValue, UserDsn,
    WemAction,
};
use crate::error::{Error, Result};
use crate::gpo::extract::{
    datasources, drives, env_variables, files, folders, ini_files, printers, registry, report,
    FilterRecord,
};
use crate::gpo::{find_backups, GpoBackup, Scope};
use crate::output::{write_actions, write_filters};

/// Name of the output subfolder receiving embedded script files
const SCRIPT_OUTPUT_DIR: &str = "NeedsFileLocation";

/// Name of the filter export file
const FILTERS_FILE: &str = "filters.csv";

/// Conversion options consumed by the extractors
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Prefix prepended to every computed action name
    pub prefix: String,
    /// Force self-healing on, overriding source run-once filters
    pub self_healing: bool,
    /// Use the computed name when the source has no description
    pub use_name_for_description: bool,
    /// Emit every action disabled
    pub disable: bool,
    /// Collect and export filter records
    pub export_filters: bool,
}

/// Per-kind action counts of a completed run
#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub backups: usize,
    pub net_drives: usize,
    pub env_variables: usize,
    pub file_system_ops: usize,
    pub ini_file_ops: usize,
    pub printers: usize,
    pub reg_values: usize,
    pub user_dsns: usize,
    pub external_tasks: usize,
    pub filter_records: usize,
    pub script_files_copied: usize,
}

impl ConvertSummary {
    pub fn total_actions(&self) -> usize {
        self.net_drives
            + self.env_variables
            + self.file_system_ops
            + self.ini_file_ops
            + self.printers
            + self.reg_values
            + self.user_dsns
            + self.external_tasks
    }
}

/// The batch orchestrator
///
/// Collections grow across backups and are only serialized after the
/// full batch has been processed.
pub struct GpoConverter {
    backup_root: PathBuf,
    output_dir: PathBuf,
    opts: ConvertOptions,
    net_drives: Vec<NetDrive>,
    env_variables: Vec<EnvVariable>,
    file_system_ops: Vec<FileSystemOp>,
    ini_file_ops: Vec<IniFileOp>,
    printers: Vec<Printer>,
    reg_values: Vec<RegValue>,
    user_dsns: Vec<UserDsn>,
    external_tasks: Vec<ExternalTask>,
    filter_records: Vec<FilterRecord>,
    script_sources: Vec<PathBuf>,
}

impl GpoConverter {
    pub fn new(backup_root: &Path, output_dir: &Path, opts: ConvertOptions) -> Self {
        GpoConverter {
            backup_root: backup_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            opts,
            net_drives: Vec::new(),
            env_variables: Vec::new(),
            file_system_ops: Vec::new(),
            ini_file_ops: Vec::new(),
            printers: Vec::new(),
            reg_values: Vec::new(),
            user_dsns: Vec::new(),
            external_tasks: Vec::new(),
            filter_records: Vec::new(),
            script_sources: Vec::new(),
        }
    }

    /// Run the full pipeline: validate, extract, serialize
    ///
    /// All fatal input checks happen before any backup is read, so a
    /// failing run never produces partial output.
    pub fn run(&mut self) -> Result<ConvertSummary> {
        if !self.output_dir.is_dir() {
            return Err(Error::OutputPathNotFound(self.output_dir.clone()));
        }
        let backups = find_backups(&self.backup_root)?;
        info!("converting {} GPO backup(s)", backups.len());

        for backup in &backups {
            self.convert_backup(backup);
        }
        self.write_outputs(backups.len())
    }

    fn convert_backup(&mut self, backup: &GpoBackup) {
        debug!("processing backup {}", backup.id);
        for scope in [Scope::User, Scope::Machine] {
            if let Some(doc) = backup.preference_doc(scope, "Drives") {
                drives::extract(&doc, &self.opts, &mut self.net_drives, &mut self.filter_records);
            }
            if let Some(doc) = backup.preference_doc(scope, "EnvironmentVariables") {
                env_variables::extract(
                    &doc,
                    &self.opts,
                    &mut self.env_variables,
                    &mut self.filter_records,
                );
            }
            if let Some(doc) = backup.preference_doc(scope, "Files") {
                files::extract(
                    &doc,
                    &self.opts,
                    &mut self.file_system_ops,
                    &mut self.filter_records,
                );
            }
            if let Some(doc) = backup.preference_doc(scope, "Folders") {
                folders::extract(
                    &doc,
                    &self.opts,
                    &mut self.file_system_ops,
                    &mut self.filter_records,
                );
            }
            if let Some(doc) = backup.preference_doc(scope, "IniFiles") {
                ini_files::extract(
                    &doc,
                    &self.opts,
                    &mut self.ini_file_ops,
                    &mut self.filter_records,
                );
            }
            if let Some(doc) = backup.preference_doc(scope, "Printers") {
                printers::extract(&doc, &self.opts, &mut self.printers, &mut self.filter_records);
            }
            if let Some(doc) = backup.preference_doc(scope, "Registry") {
                registry::extract(&doc, &self.opts, &mut self.reg_values, &mut self.filter_records);
            }
            if let Some(doc) = backup.preference_doc(scope, "DataSources") {
                datasources::extract(
                    &doc,
                    &self.opts,
                    &mut self.user_dsns,
                    &mut self.filter_records,
                );
            }
        }
        if let Some(report_text) = backup.report() {
            report::extract_deployed_printers(&report_text, &self.opts, &mut self.printers);
            report::extract_run_at_logon(&report_text, &self.opts, &mut self.external_tasks);
            report::extract_logon_scripts(
                &report_text,
                &backup.logon_script_dir(),
                &self.opts,
                &mut self.external_tasks,
                &mut self.script_sources,
            );
        } else {
            debug!("backup {} has no policy report", backup.id);
        }
    }

    fn write_outputs(&self, backups: usize) -> Result<ConvertSummary> {
        self.write_kind(&self.net_drives)?;
        self.write_kind(&self.env_variables)?;
        self.write_kind(&self.file_system_ops)?;
        self.write_kind(&self.ini_file_ops)?;
        self.write_kind(&self.printers)?;
        self.write_kind(&self.reg_values)?;
        self.write_kind(&self.user_dsns)?;
        self.write_kind(&self.external_tasks)?;

        if self.opts.export_filters && !self.filter_records.is_empty() {
            write_filters(&self.output_dir.join(FILTERS_FILE), &self.filter_records)?;
        }
        let script_files_copied = self.copy_script_sources()?;

        Ok(ConvertSummary {
            backups,
            net_drives: self.net_drives.len(),
            env_variables: self.env_variables.len(),
            file_system_ops: self.file_system_ops.len(),
            ini_file_ops: self.ini_file_ops.len(),
            printers: self.printers.len(),
            reg_values: self.reg_values.len(),
            user_dsns: self.user_dsns.len(),
            external_tasks: self.external_tasks.len(),
            filter_records: self.filter_records.len(),
            script_files_copied,
        })
    }

    fn write_kind<A: WemAction>(&self, actions: &[A]) -> Result<()> {
        if actions.is_empty() {
            return Ok(());
        }
        let path = self.output_dir.join(A::FILE_NAME);
        info!("writing {} {} action(s) to {}", actions.len(), A::KIND, path.display());
        write_actions(&path, actions)
    }

    /// Copy every scheduled embedded-script folder into the output
    fn copy_script_sources(&self) -> Result<usize> {
        if self.script_sources.is_empty() {
            return Ok(0);
        }
        let dest = self.output_dir.join(SCRIPT_OUTPUT_DIR);
        fs::create_dir_all(&dest)?;
        let mut copied = 0;
        for source in &self.script_sources {
            for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() {
                    fs::copy(entry.path(), dest.join(entry.file_name()))?;
                    copied += 1;
                }
            }
        }
        info!("copied {copied} embedded script file(s) to {}", dest.display());
        Ok(copied)
    }
}
