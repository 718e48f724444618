use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dev/pub version synchronization tool for staged scene files
///
/// Keeps the dev working copy, the pub published copy and the floating
/// v9999 "latest" alias of a scene aligned on disk
#[derive(Parser, Debug)]
#[command(name = "pubsync")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the scene at the next version and distribute it to dev, pub and the alias
    Sync {
        /// The scene file currently being worked on
        scene: PathBuf,

        /// Worker name recorded in the notes log
        #[arg(long, env = "PUBSYNC_WORKER")]
        worker: Option<String>,

        /// Free-text memo recorded in the notes log
        #[arg(short, long, default_value = "")]
        memo: String,
    },

    /// Show whether dev, pub and the alias are already aligned
    Status {
        /// The scene file to check
        scene: PathBuf,
    },

    /// Show the parsed naming-convention fields and derived paths
    Info {
        /// The scene file to inspect
        scene: PathBuf,
    },

    /// Print the notes log kept beside the published versions
    Log {
        /// Any scene file of the asset
        scene: PathBuf,
    },
}
