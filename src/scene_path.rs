//! Scene path parsing under the naming convention
//!
//! Paths follow the positional convention
//! `<...>/<stage>/<wip>/scenes/<base>_v<NNNN>.<ext>` where `stage` is one
//! of `mdl`, `ldv`, `rig` and `wip` is `dev` or `pub`. The parser locates
//! the first stage segment and derives everything else from its position,
//! so a user folder that happens to be called `dev` never confuses the
//! dev/pub substitution.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{PathError, Result, SyncError};
use crate::version::Version;

/// Pipeline stage folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Modeling
    Mdl,
    /// Layout/dressing
    Ldv,
    /// Rigging
    Rig,
}

impl Stage {
    /// All recognized stage folder names
    pub const ALL: [Self; 3] = [Self::Mdl, Self::Ldv, Self::Rig];

    /// The folder name for this stage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mdl => "mdl",
            Self::Ldv => "ldv",
            Self::Rig => "rig",
        }
    }

    /// Match a path segment against the recognized stage names
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == segment)
    }
}

/// Work-in-progress tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wip {
    /// Private working copies
    Dev,
    /// Published/shared copies
    Pub,
}

impl Wip {
    /// The folder name for this tier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Pub => "pub",
        }
    }

    /// The opposite tier
    #[must_use]
    pub const fn sibling(self) -> Self {
        match self {
            Self::Dev => Self::Pub,
            Self::Pub => Self::Dev,
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "dev" => Some(Self::Dev),
            "pub" => Some(Self::Pub),
            _ => None,
        }
    }
}

/// A parsed scene path
///
/// Constructed fresh from a path on every query and immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePath {
    directory: PathBuf,
    file_name: String,
    name_without_extension: String,
    /// Extension including the leading dot, empty when the name has none
    extension: String,
    stage: Stage,
    wip: Wip,
    /// Position of the wip segment among the directory's components
    wip_index: usize,
    version_token: String,
    name_without_version: String,
}

impl ScenePath {
    /// Parse a scene file path
    ///
    /// The first segment matching a stage name wins when one appears more
    /// than once in the path.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidPath`] when the path has no stage
    /// segment, the segment after the stage is not `dev`/`pub`, the path
    /// has no file name, or the file stem has no trailing version token.
    pub fn parse(path: &Path) -> Result<Self> {
        let invalid = |cause| SyncError::InvalidPath {
            path: path.to_path_buf(),
            cause,
        };

        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| invalid(PathError::NoFileName))?
            .to_string();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let components: Vec<Component<'_>> = directory.components().collect();
        let (stage_index, stage) = components
            .iter()
            .enumerate()
            .find_map(|(i, c)| {
                segment_str(c)
                    .and_then(Stage::from_segment)
                    .map(|stage| (i, stage))
            })
            .ok_or_else(|| invalid(PathError::NoStageSegment))?;

        let wip_index = stage_index + 1;
        let wip = components
            .get(wip_index)
            .and_then(segment_str)
            .and_then(Wip::from_segment)
            .ok_or_else(|| invalid(PathError::NoWipSegment))?;

        let (name_without_extension, extension) = match file_name.rsplit_once('.') {
            Some((stem, ext)) => (stem.to_string(), format!(".{ext}")),
            None => (file_name.clone(), String::new()),
        };

        let (name_without_version, version_token) = name_without_extension
            .rsplit_once('_')
            .map(|(base, token)| (base.to_string(), token.to_string()))
            .ok_or_else(|| invalid(PathError::NoVersionToken))?;

        Ok(Self {
            directory,
            file_name,
            name_without_extension,
            extension,
            stage,
            wip,
            wip_index,
            version_token,
            name_without_version,
        })
    }

    /// The directory holding the file
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file name with extension
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file name without its extension
    #[must_use]
    pub fn name_without_extension(&self) -> &str {
        &self.name_without_extension
    }

    /// The extension including the leading dot, empty when absent
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The pipeline stage the file belongs to
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// The tier the file currently lives in
    #[must_use]
    pub const fn wip(&self) -> Wip {
        self.wip
    }

    /// The raw trailing token of the stem, e.g. `v0011`; unvalidated
    #[must_use]
    pub fn version_token(&self) -> &str {
        &self.version_token
    }

    /// The strictly parsed version, `None` when the token is malformed
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        Version::parse(&self.version_token)
    }

    /// Whether the file is the reserved `v9999` alias copy
    #[must_use]
    pub fn is_alias(&self) -> bool {
        self.version().is_some_and(Version::is_alias)
    }

    /// The stem with the trailing version token removed
    #[must_use]
    pub fn name_without_version(&self) -> &str {
        &self.name_without_version
    }

    /// The directory with the wip segment swapped for `wip`
    ///
    /// Only the segment at the parsed wip position is substituted, so
    /// exactly one of [`Self::dev_directory`]/[`Self::pub_directory`]
    /// equals [`Self::directory`] and the two differ in that segment
    /// alone.
    #[must_use]
    pub fn wip_directory(&self, wip: Wip) -> PathBuf {
        self.directory
            .components()
            .enumerate()
            .map(|(i, c)| {
                if i == self.wip_index {
                    Component::Normal(OsStr::new(wip.as_str()))
                } else {
                    c
                }
            })
            .collect()
    }

    /// The sibling dev directory (or the file's own when it lives in dev)
    #[must_use]
    pub fn dev_directory(&self) -> PathBuf {
        self.wip_directory(Wip::Dev)
    }

    /// The sibling pub directory (or the file's own when it lives in pub)
    #[must_use]
    pub fn pub_directory(&self) -> PathBuf {
        self.wip_directory(Wip::Pub)
    }

    /// The Alembic cache directory: the pub directory with a trailing
    /// `scenes` segment replaced by `data/abc`
    ///
    /// A pub directory that does not end in `scenes` is returned
    /// unchanged.
    #[must_use]
    pub fn abc_data_directory(&self) -> PathBuf {
        let mut dir = self.pub_directory();
        if dir.file_name() == Some(OsStr::new("scenes")) {
            dir.pop();
            dir.push("data");
            dir.push("abc");
        }
        dir
    }

    /// The floating Alembic alias path, `<abcDir>/<base>_v9999.abc`
    #[must_use]
    pub fn abc_alias_path(&self) -> PathBuf {
        self.abc_data_directory()
            .join(format!("{}_{}.abc", self.name_without_version, Version::ALIAS))
    }

    /// The file name this scene takes at `version`
    #[must_use]
    pub fn versioned_name(&self, version: Version) -> String {
        format!("{}_{}{}", self.name_without_version, version, self.extension)
    }
}

fn segment_str<'a>(component: &Component<'a>) -> Option<&'a str> {
    match component {
        Component::Normal(segment) => segment.to_str(),
        _ => None,
    }
}
