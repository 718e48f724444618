mod cli;
mod commands;
mod interactive;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::Options;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Dry run: {}", cli.dry_run);
        println!("Yes: {}", cli.yes);
    }

    // Resolve global flags once for every command
    let options = Options::new(&cli);

    match &cli.command {
        Commands::Sync {
            scene,
            worker,
            memo,
        } => {
            commands::Synchronize::execute(scene, worker.as_deref(), memo, &options)
                .context("Failed to execute sync command")?;
        }
        Commands::Status { scene } => {
            commands::Status::execute(scene, &options)
                .context("Failed to execute status command")?;
        }
        Commands::Info { scene } => {
            commands::Info::execute(scene, &options).context("Failed to execute info command")?;
        }
        Commands::Log { scene } => {
            commands::Log::execute(scene).context("Failed to execute log command")?;
        }
    }

    Ok(())
}
