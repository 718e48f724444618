//! Save-and-distribute synchronization engine
//!
//! One sync takes the currently open document, allocates the next shared
//! version, and lands three copies: a numbered one in dev, a numbered one
//! in pub, and the floating `v9999` alias next to the pub versions.
//!
//! The triple is a shared on-disk resource with no locking: two workers
//! syncing the same scene race, and the last copy to land wins. There is
//! also no rollback across the save/copy sequence; a mid-sequence failure
//! leaves the triple inconsistent until the next sync picks it up. Both
//! are long-standing properties of the pipeline this tool serves and are
//! kept as-is.

mod executor;
mod orchestrator;
mod planner;
mod reporting;

pub use executor::{DocumentHost, FsHost, SyncExecutor};
pub use orchestrator::{ApprovalCallback, SyncEngine};
pub use planner::{SyncPlan, SyncPlanner};
pub use reporting::SyncReporter;

use crate::comparison::SyncState;

/// Which save/copy sequence ran, derived from where the open file lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRoute {
    /// Open file lives in dev: save there, copy into pub and the alias
    FromDev,
    /// Open file lives in pub: save there, copy into dev and the alias
    FromPub,
    /// Open file IS the pub alias: save in place, copy into both
    /// numbered slots
    NormalizeAlias,
}

/// Result of one sync request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The triple was already aligned; nothing was written
    AlreadySynchronized(SyncState),
    /// The approver declined the plan; nothing was written
    Cancelled,
    /// The open document was distributed to the three targets
    Distributed {
        /// The route taken
        route: SyncRoute,
        /// The executed plan
        plan: SyncPlan,
    },
}

impl SyncOutcome {
    /// Whether this outcome wrote the target triple
    #[must_use]
    pub const fn distributed(&self) -> bool {
        matches!(self, Self::Distributed { .. })
    }
}
