//! Directory scanning for versioned scene files
//!
//! A scan is a single directory level deep; the naming convention keeps
//! every version of a scene directly inside its `scenes` folder.

use std::fs;
use std::path::Path;

use crate::error::{Result, SyncError};
use crate::version::Version;

/// Scene file extensions considered during scans
pub const SCENE_EXTENSIONS: [&str; 2] = ["ma", "mb"];

/// Finds the highest assignable version present in a directory
pub struct VersionScanner;

impl VersionScanner {
    /// Maximum valid version among the scene files directly in `dir`
    ///
    /// Only strict `vNNNN` trailing tokens count; the reserved `v9999`
    /// alias and malformed tokens are skipped. Returns `None` when the
    /// directory is missing, empty, or holds no valid candidate; callers
    /// branch on the absence rather than catching an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn max_version(dir: &Path) -> Result<Option<Version>> {
        if !dir.exists() {
            return Ok(None);
        }

        let entries = fs::read_dir(dir).map_err(|e| SyncError::fs("read directory", dir, e))?;

        let mut max = None;
        for entry in entries {
            let entry = entry.map_err(|e| SyncError::fs("read directory", dir, e))?;
            let path = entry.path();
            if !path.is_file() || !Self::is_scene_file(&path) {
                continue;
            }
            let Some(version) = Self::file_version(&path) else {
                continue;
            };
            if version.is_alias() {
                continue;
            }
            max = max.max(Some(version));
        }

        Ok(max)
    }

    /// Whether the file carries one of the recognized scene extensions
    fn is_scene_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| SCENE_EXTENSIONS.contains(&e))
    }

    /// Strict version of a file's trailing stem token, if any
    fn file_version(path: &Path) -> Option<Version> {
        let stem = path.file_stem()?.to_str()?;
        let (_, token) = stem.rsplit_once('_')?;
        Version::parse(token)
    }
}
