//! Configuration file parsing and discovery
//!
//! An optional TOML file carries the defaults the flags would otherwise
//! repeat on every invocation. Discovery order: the `--config` flag,
//! then `./.pubsync.toml`, then the user config directory. CLI flags
//! always win over file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// File name searched for in the working directory
const LOCAL_CONFIG: &str = ".pubsync.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Worker name recorded in the notes log
    #[serde(default)]
    pub worker: Option<String>,

    /// Preview operations without writing
    #[serde(default)]
    pub dry_run: bool,

    /// Skip the interactive confirmation
    #[serde(default)]
    pub yes: bool,
}

impl Config {
    /// Load configuration, following the discovery order
    ///
    /// An explicit path must exist and parse; discovered files are used
    /// when present and the defaults are returned otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a single config file
    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// First config file present in the discovery locations
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return Some(local);
        }

        let user = dirs::config_dir()?.join("pubsync").join("config.toml");
        user.is_file().then_some(user)
    }

    /// Merge CLI flags into the loaded config (CLI takes precedence)
    pub fn merge_cli_flags(&mut self, worker: Option<&str>, dry_run: bool, yes: bool) {
        if let Some(worker) = worker {
            self.worker = Some(worker.to_string());
        }
        if dry_run {
            self.dry_run = true;
        }
        if yes {
            self.yes = true;
        }
    }
}
