//! Per-cause priority adjustments.

use serde::{Deserialize, Serialize};

use super::Cause;

/// Cause weight settings, shared by every task in the queue.
///
/// Persisted as the `[weights]` section of `priosort.toml` and loaded at
/// startup. All weights default to 0, which leaves configured base
/// priorities untouched until an administrator opts in.
///
/// # Example
///
/// ```toml
/// [weights]
/// user = 10    # per user-initiated cause
/// scm = 5      # per source-control change cause
/// timer = 1    # per timer cause
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CauseWeights {
    /// Adjustment added per user-initiated cause.
    pub user: i32,
    /// Adjustment added per source-control change cause.
    pub scm: i32,
    /// Adjustment added per timer cause.
    pub timer: i32,
}

impl CauseWeights {
    pub const fn new(user: i32, scm: i32, timer: i32) -> Self {
        Self { user, scm, timer }
    }

    /// Weight contributed by a single cause.
    ///
    /// The mapping is total: every cause kind resolves to a weight, and
    /// kinds this policy does not weight contribute 0.
    pub const fn weight_for(&self, cause: Cause) -> i32 {
        match cause {
            Cause::UserInitiated => self.user,
            Cause::SourceChange => self.scm,
            Cause::Timer => self.timer,
            Cause::Other => 0,
        }
    }
}
