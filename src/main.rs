// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ConvertGpo {
            gpo_backup_path,
            output_path,
            prefix,
            self_healing,
            use_name_for_description,
            disable,
            export_filters,
            verbose,
        }) => {
            init_tracing(verbose);
            commands::cmd_convert_gpo(
                &gpo_backup_path,
                &output_path,
                prefix.as_deref(),
                self_healing,
                use_name_for_description,
                disable,
                export_filters,
            )
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("gpo2wem v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'gpo2wem --help' for usage information");
            Ok(())
        }
    }
}
