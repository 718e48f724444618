//! Target path planning for a save-and-distribute operation

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SyncError};
use crate::scanner::VersionScanner;
use crate::scene_path::ScenePath;
use crate::version::{self, Version};

/// The three target paths of one distribution plus the allocated version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// New numbered copy in the dev directory
    pub dev_target: PathBuf,
    /// New numbered copy in the pub directory
    pub pub_target: PathBuf,
    /// Floating `v9999` alias in the pub directory
    pub alias_target: PathBuf,
    /// The freshly allocated version shared by the dev and pub targets
    pub version: Version,
}

/// Derives the target triple for a scene
pub struct SyncPlanner;

impl SyncPlanner {
    /// Plan the next distribution for `scene`
    ///
    /// Creates the dev and pub directories when missing (idempotent, no
    /// error when already present). In dry-run mode nothing is created
    /// and missing directories scan as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or scanned, or
    /// if version allocation overflows.
    pub fn plan(scene: &ScenePath, dry_run: bool) -> Result<SyncPlan> {
        let dev_dir = scene.dev_directory();
        let pub_dir = scene.pub_directory();

        if !dry_run {
            fs::create_dir_all(&dev_dir)
                .map_err(|e| SyncError::fs("create directory", &dev_dir, e))?;
            fs::create_dir_all(&pub_dir)
                .map_err(|e| SyncError::fs("create directory", &pub_dir, e))?;
        }

        let dev_max = VersionScanner::max_version(&dev_dir)?;
        let pub_max = VersionScanner::max_version(&pub_dir)?;
        let version = version::allocate(dev_max, pub_max)?;

        Ok(SyncPlan {
            dev_target: dev_dir.join(scene.versioned_name(version)),
            pub_target: pub_dir.join(scene.versioned_name(version)),
            alias_target: pub_dir.join(scene.versioned_name(Version::ALIAS)),
            version,
        })
    }
}
