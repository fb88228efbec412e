// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("gpo2wem")
        .version(env!("CARGO_PKG_VERSION"))
        .author("gpo2wem Contributors")
        .about("Convert GPO backups into WEM action XML import files")
        .subcommand_required(false)
        .subcommand(
            Command::new("convert-gpo")
                .about("Convert GPO backups into WEM action import documents")
                .arg(
                    Arg::new("gpo_backup_path")
                        .short('g')
                        .long("gpo-backup-path")
                        .required(true)
                        .help("Directory containing exported GPO backup folders"),
                )
                .arg(
                    Arg::new("output_path")
                        .short('o')
                        .long("output-path")
                        .default_value(".")
                        .help("Directory receiving the output documents"),
                )
                .arg(
                    Arg::new("prefix")
                        .short('p')
                        .long("prefix")
                        .help("Prefix prepended to every generated action name"),
                )
                .arg(
                    Arg::new("self_healing")
                        .long("self-healing")
                        .action(clap::ArgAction::SetTrue)
                        .help("Force self-healing on, overriding source run-once filters"),
                )
                .arg(
                    Arg::new("use_name_for_description")
                        .long("use-name-for-description")
                        .action(clap::ArgAction::SetTrue)
                        .help("Use the action name as description when the source has none"),
                )
                .arg(
                    Arg::new("disable")
                        .long("disable")
                        .action(clap::ArgAction::SetTrue)
                        .help("Emit every action in disabled state"),
                )
                .arg(
                    Arg::new("export_filters")
                        .long("export-filters")
                        .action(clap::ArgAction::SetTrue)
                        .help("Also export source filter rules to filters.csv"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("gpo2wem.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
