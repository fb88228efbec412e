// src/cli.rs
//! CLI definitions for the gpo2wem converter
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "gpo2wem")]
#[command(author = "gpo2wem Contributors")]
#[command(version)]
#[command(about = "Convert GPO backups into WEM action XML import files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert GPO backups into WEM action import documents
    ///
    /// Walks every {GUID}-named backup directory under the backup
    /// path and writes one XML document per action kind that was
    /// found. Nothing is imported anywhere: the output files are
    /// meant to be imported into the management console by hand.
    #[command(name = "convert-gpo")]
    ConvertGpo {
        /// Directory containing exported GPO backup folders
        #[arg(short, long)]
        gpo_backup_path: String,

        /// Directory receiving the output documents (must exist)
        #[arg(short, long, default_value = ".")]
        output_path: String,

        /// Prefix prepended to every generated action name
        #[arg(short, long)]
        prefix: Option<String>,

        /// Force self-healing on, overriding source run-once filters
        #[arg(long)]
        self_healing: bool,

        /// Use the action name as description when the source has none
        #[arg(long)]
        use_name_for_description: bool,

        /// Emit every action in disabled state
        #[arg(long)]
        disable: bool,

        /// Also export source filter rules to filters.csv
        #[arg(long)]
        export_filters: bool,

        /// Show per-item diagnostics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}
