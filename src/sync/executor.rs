//! Distribution executor and the host document seam

use std::fs;
use std::path::{Path, PathBuf};

use super::SyncRoute;
use super::planner::SyncPlan;
use crate::error::{Result, SyncError};
use crate::scene_path::{ScenePath, Wip};

/// Host-supplied document primitives
///
/// The sync engine never looks inside a scene file. It asks the host to
/// persist the open document and copies the resulting bytes; in a DCC
/// this maps onto the application's save/save-as calls, on the command
/// line the document is simply a file on disk.
pub trait DocumentHost {
    /// Path of the currently open document, `None` when it was never
    /// saved
    fn document_path(&self) -> Option<PathBuf>;

    /// Persist the open document in place
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to save.
    fn save(&mut self) -> Result<()>;

    /// Persist the open document under `path`, which becomes the new
    /// document path
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to save.
    fn save_as(&mut self, path: &Path) -> Result<()>;
}

/// Filesystem-backed host: the "open document" is a plain file on disk
///
/// `save` is a no-op because the bytes are already persisted; `save_as`
/// copies them and moves the document path along, the way a DCC save-as
/// does.
#[derive(Debug, Clone)]
pub struct FsHost {
    path: Option<PathBuf>,
}

impl FsHost {
    /// Treat `path` as the open document
    ///
    /// A path with no file behind it behaves like a never-saved document
    /// and is refused before any side effect.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.is_file().then(|| path.to_path_buf()),
        }
    }
}

impl DocumentHost for FsHost {
    fn document_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }

    fn save(&mut self) -> Result<()> {
        Ok(())
    }

    fn save_as(&mut self, path: &Path) -> Result<()> {
        let current = self.path.as_ref().ok_or(SyncError::UnsavedDocument)?;
        copy_file(current, path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }
}

/// Copy `source` to `dest`, creating the destination's parent if needed
fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::fs("create directory", parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| SyncError::fs("copy", dest, e))?;
    Ok(())
}

/// Executes the save/copy sequence of a plan
pub struct SyncExecutor {
    dry_run: bool,
}

impl SyncExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Pick the save/copy sequence for the open file's location
    #[must_use]
    pub fn route(scene: &ScenePath) -> SyncRoute {
        match scene.wip() {
            Wip::Dev => SyncRoute::FromDev,
            Wip::Pub if scene.is_alias() => SyncRoute::NormalizeAlias,
            Wip::Pub => SyncRoute::FromPub,
        }
    }

    /// Save the open document and distribute it to the plan's targets
    ///
    /// A file open in dev is saved there and copied into pub and the
    /// alias; one open in pub is saved there and copied into dev and the
    /// alias; an open alias is saved in place and copied into both
    /// numbered slots. There is no rollback: a failed copy aborts the
    /// remaining steps and leaves the triple inconsistent until the next
    /// sync.
    ///
    /// # Errors
    ///
    /// Returns an error if the host save or any copy fails.
    pub fn distribute<H: DocumentHost>(
        &self,
        host: &mut H,
        scene: &ScenePath,
        plan: &SyncPlan,
    ) -> Result<SyncRoute> {
        let route = Self::route(scene);
        match route {
            SyncRoute::FromDev => {
                self.save_as(host, &plan.dev_target)?;
                self.copy(&plan.dev_target, &plan.pub_target)?;
                self.copy(&plan.dev_target, &plan.alias_target)?;
            }
            SyncRoute::FromPub => {
                self.save_as(host, &plan.pub_target)?;
                self.copy(&plan.pub_target, &plan.dev_target)?;
                self.copy(&plan.pub_target, &plan.alias_target)?;
            }
            SyncRoute::NormalizeAlias => {
                self.save_in_place(host)?;
                self.copy(&plan.alias_target, &plan.dev_target)?;
                self.copy(&plan.alias_target, &plan.pub_target)?;
            }
        }
        Ok(route)
    }

    fn save_as<H: DocumentHost>(&self, host: &mut H, target: &Path) -> Result<()> {
        if self.dry_run {
            eprintln!("[DRY RUN] Would save as: {}", target.display());
            return Ok(());
        }
        host.save_as(target)
    }

    fn save_in_place<H: DocumentHost>(&self, host: &mut H) -> Result<()> {
        if self.dry_run {
            eprintln!("[DRY RUN] Would save the open document in place");
            return Ok(());
        }
        host.save()
    }

    fn copy(&self, source: &Path, dest: &Path) -> Result<()> {
        if self.dry_run {
            eprintln!(
                "[DRY RUN] Would copy: {} -> {}",
                source.display(),
                dest.display()
            );
            return Ok(());
        }
        copy_file(source, dest)
    }
}
