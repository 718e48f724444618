//! Error taxonomy for the version-sync core
//!
//! Validation failures (bad path, unsaved document) are checked up front
//! and block an operation before any side effect. An absent version is
//! not an error at all; scans report it as `None` and callers substitute
//! the `v0000` floor.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using [`SyncError`]
pub type Result<T, E = SyncError> = std::result::Result<T, E>;

/// Why a scene path failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// No stage segment (mdl/ldv/rig) anywhere in the path
    NoStageSegment,
    /// The segment after the stage is missing or not dev/pub
    NoWipSegment,
    /// The path has no usable file name component
    NoFileName,
    /// The file stem has no underscore-separated trailing version token
    NoVersionToken,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::NoStageSegment => "no stage folder (mdl/ldv/rig) in path",
            Self::NoWipSegment => "no dev/pub folder after the stage folder",
            Self::NoFileName => "path has no file name",
            Self::NoVersionToken => "file name has no trailing version token",
        };
        f.write_str(msg)
    }
}

/// Errors produced by the version-sync core
#[derive(Debug, Error)]
pub enum SyncError {
    /// The input path does not follow the stage/wip/scenes naming
    /// convention
    #[error("invalid scene path {}: {cause}", .path.display())]
    InvalidPath {
        /// The rejected path
        path: PathBuf,
        /// What the parser could not find
        cause: PathError,
    },

    /// The next version number would collide with the reserved `v9999`
    /// alias; the counter never wraps back to `v0000`
    #[error("version capacity exhausted: the version after {current} is the reserved v9999")]
    VersionOverflow {
        /// The version allocation started from
        current: crate::version::Version,
    },

    /// Sync was requested for a document that has never been saved
    #[error("the open document has no path yet, save the scene first")]
    UnsavedDocument,

    /// A filesystem operation failed
    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        /// The attempted operation, e.g. "copy"
        action: &'static str,
        /// The path the operation was applied to
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl SyncError {
    /// Attach an action and path to an I/O error
    pub(crate) fn fs(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
