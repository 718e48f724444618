//! Sync orchestration - coordinates the sync workflow

use super::SyncOutcome;
use super::executor::{DocumentHost, SyncExecutor};
use super::planner::{SyncPlan, SyncPlanner};
use crate::comparison::ConsistencyChecker;
use crate::error::{Result, SyncError};
use crate::scene_path::ScenePath;

/// Approval callback invoked with the plan before anything is written
///
/// Returning `false` cancels the distribution without a write.
pub type ApprovalCallback<'a> = Box<dyn FnMut(&SyncPlan) -> bool + 'a>;

/// Main sync engine
pub struct SyncEngine {
    dry_run: bool,
}

impl SyncEngine {
    /// Create a new sync engine
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute the sync operation
    ///
    /// # Errors
    ///
    /// Returns an error if the document was never saved, the path does
    /// not follow the naming convention, version allocation overflows,
    /// or a save/copy fails.
    pub fn sync<H: DocumentHost>(&self, host: &mut H) -> Result<SyncOutcome> {
        self.sync_with_approver(host, None)
    }

    /// Execute the sync operation with an optional approval callback
    ///
    /// The approver is called once with the computed plan, after the
    /// consistency check and before any write.
    ///
    /// # Errors
    ///
    /// See [`Self::sync`].
    pub fn sync_with_approver<H: DocumentHost>(
        &self,
        host: &mut H,
        mut approver: Option<ApprovalCallback<'_>>,
    ) -> Result<SyncOutcome> {
        // Validation failures block the operation before any side effect.
        let path = host.document_path().ok_or(SyncError::UnsavedDocument)?;
        let scene = ScenePath::parse(&path)?;

        // Skip the whole distribution when the triple is already aligned.
        let state = ConsistencyChecker::check(&scene);
        if state.is_synchronized() {
            return Ok(SyncOutcome::AlreadySynchronized(state));
        }

        let plan = SyncPlanner::plan(&scene, self.dry_run)?;

        if let Some(approve) = approver.as_mut() {
            if !approve(&plan) {
                return Ok(SyncOutcome::Cancelled);
            }
        }

        let route = SyncExecutor::new(self.dry_run).distribute(host, &scene, &plan)?;
        Ok(SyncOutcome::Distributed { route, plan })
    }
}
