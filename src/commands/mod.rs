mod info;
mod log;
mod status;
mod sync;

use std::path::PathBuf;

pub use info::Info;
pub use log::Log;
pub use status::Status;
pub use sync::Synchronize;

use crate::cli::Cli;

/// Options shared by every command, resolved from the global CLI flags
pub struct Options {
    pub verbose: bool,
    pub dry_run: bool,
    pub yes: bool,
    pub config: Option<PathBuf>,
    pub no_config: bool,
}

impl Options {
    pub fn new(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            dry_run: cli.dry_run,
            yes: cli.yes,
            config: cli.config.clone(),
            no_config: cli.no_config,
        }
    }

    /// Load the config file respecting --config/--no-config
    pub fn load_config(&self) -> anyhow::Result<pubsync::config::Config> {
        if self.no_config {
            return Ok(pubsync::config::Config::default());
        }
        pubsync::config::Config::load(self.config.as_deref())
    }
}
