// src/commands/convert.rs

//! GPO backup conversion CLI command

use std::path::Path;

use anyhow::Result;
use tracing::info;

use gpo2wem::convert::{ConvertOptions, GpoConverter};

/// Convert GPO backups into WEM action import documents
#[allow(clippy::too_many_arguments)]
pub fn cmd_convert_gpo(
    gpo_backup_path: &str,
    output_path: &str,
    prefix: Option<&str>,
    self_healing: bool,
    use_name_for_description: bool,
    disable: bool,
    export_filters: bool,
) -> Result<()> {
    let opts = ConvertOptions {
        prefix: prefix.unwrap_or("").to_string(),
        self_healing,
        use_name_for_description,
        disable,
        export_filters,
    };
    info!("converting GPO backups from {gpo_backup_path}");

    let mut converter = GpoConverter::new(Path::new(gpo_backup_path), Path::new(output_path), opts);
    let summary = converter.run()?;

    println!(
        "Converted {} backup(s) into {} action(s):",
        summary.backups,
        summary.total_actions()
    );
    for (label, count) in [
        ("Net drives", summary.net_drives),
        ("Environment variables", summary.env_variables),
        ("File system operations", summary.file_system_ops),
        ("Ini file operations", summary.ini_file_ops),
        ("Printers", summary.printers),
        ("Registry values", summary.reg_values),
        ("User DSNs", summary.user_dsns),
        ("External tasks", summary.external_tasks),
    ] {
        if count > 0 {
            println!("  {label}: {count}");
        }
    }
    if export_filters && summary.filter_records > 0 {
        println!("  Filter records exported: {}", summary.filter_records);
    }
    if summary.script_files_copied > 0 {
        println!(
            "  Embedded script files copied: {} (relocate them and re-enable the tasks)",
            summary.script_files_copied
        );
    }
    Ok(())
}
