//! File comparison and consistency checking
//!
//! Determines whether the dev copy, pub copy and pub alias of a scene are
//! already aligned so unnecessary syncs can be skipped. A version
//! mismatch short-circuits before any content comparison, and filesystem
//! trouble always degrades to "needs sync" rather than failing the check.

mod hash;

use std::fmt;

pub use hash::{FileHash, FileHasher};

use crate::scanner::VersionScanner;
use crate::scene_path::ScenePath;
use crate::version::Version;

/// Derived alignment state of the dev/pub/alias triple
///
/// Computed fresh on every check, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Dev, pub and the alias hold identical bytes at the same version
    Synchronized {
        /// The shared maximum version
        version: Version,
    },
    /// The tiers disagree on the maximum version; content not compared
    VersionMismatch {
        /// Highest version in the dev directory, if any
        dev: Option<Version>,
        /// Highest version in the pub directory, if any
        pub_max: Option<Version>,
    },
    /// Same maximum version but differing or unreadable file content
    ContentMismatch {
        /// The shared maximum version whose copies disagree
        version: Version,
    },
    /// Neither tier holds a versioned scene yet
    Empty,
}

impl SyncState {
    /// Whether everything is already aligned and a sync can be skipped
    #[must_use]
    pub const fn is_synchronized(&self) -> bool {
        matches!(self, Self::Synchronized { .. })
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synchronized { version } => {
                write!(f, "dev, pub and alias all match at {version}")
            }
            Self::VersionMismatch { dev, pub_max } => {
                write!(f, "dev) {} != pub) {}", fmt_opt(*dev), fmt_opt(*pub_max))
            }
            Self::ContentMismatch { version } => {
                write!(f, "file contents differ at {version}")
            }
            Self::Empty => f.write_str("no versioned scenes yet"),
        }
    }
}

fn fmt_opt(version: Option<Version>) -> String {
    version.map_or_else(|| "none".to_string(), |v| v.to_string())
}

/// Read-only check of the dev/pub/alias triple
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Compute the current [`SyncState`] for the scene's directories
    ///
    /// Never fails: an unreadable directory counts as holding no version
    /// and unreadable files count as mismatching content, so errors
    /// favor a re-sync over false confidence.
    #[must_use]
    pub fn check(scene: &ScenePath) -> SyncState {
        let dev_dir = scene.dev_directory();
        let pub_dir = scene.pub_directory();

        // Scan errors fold to "no version on that side".
        let dev_max = VersionScanner::max_version(&dev_dir).ok().flatten();
        let pub_max = VersionScanner::max_version(&pub_dir).ok().flatten();

        let version = match (dev_max, pub_max) {
            (None, None) => return SyncState::Empty,
            (Some(dev), Some(pub_v)) if dev == pub_v => dev,
            _ => return SyncState::VersionMismatch { dev: dev_max, pub_max },
        };

        let dev_file = dev_dir.join(scene.versioned_name(version));
        let pub_file = pub_dir.join(scene.versioned_name(version));
        let alias_file = pub_dir.join(scene.versioned_name(Version::ALIAS));

        let aligned = FileHasher::identical(&dev_file, &pub_file).unwrap_or(false)
            && FileHasher::identical(&pub_file, &alias_file).unwrap_or(false);

        if aligned {
            SyncState::Synchronized { version }
        } else {
            SyncState::ContentMismatch { version }
        }
    }
}
