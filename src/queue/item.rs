//! Buildable queue entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Cause;

// =============================================================================
// Priority Configuration
// =============================================================================

/// Per-task priority configuration.
///
/// Owned by the task definition, or absent. Absence means the task never had
/// a priority configured and resolves to
/// [`DEFAULT_PRIORITY`](super::DEFAULT_PRIORITY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityConfig {
    /// Configured base priority. Signed: negative values park a task below
    /// everything left at the default.
    pub base: i32,
}

impl PriorityConfig {
    pub const fn new(base: i32) -> Self {
        Self { base }
    }
}

// =============================================================================
// Buildable trait
// =============================================================================

/// Queue-side view of a schedulable task.
///
/// The sorter reads exactly two attributes of the host's task model: the
/// optional priority configuration and the causes attached to the queuing
/// event. Host schedulers implement this on their own task type;
/// [`BuildableItem`] is a ready-made carrier for hosts that don't have one.
pub trait Buildable {
    /// Configured priority, if any.
    fn priority_config(&self) -> Option<PriorityConfig>;

    /// Causes recorded when the task became buildable.
    fn causes(&self) -> &[Cause];
}

// =============================================================================
// BuildableItem
// =============================================================================

/// A concrete queue entry: a task name plus the attributes the sorter reads.
///
/// This is also the record type of queue snapshots (see the `order`
/// command), where `priority` maps to the task's configured base priority
/// and `causes` holds snapshot tags:
///
/// ```json
/// { "task": "backend-tests", "priority": 50, "causes": ["scm", "timer"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildableItem {
    /// Task identifier, used for display and host-side bookkeeping.
    pub task: String,

    /// Configured base priority. `None` = never configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityConfig>,

    /// Causes recorded when the task became buildable.
    #[serde(default)]
    pub causes: SmallVec<[Cause; 4]>,
}

impl BuildableItem {
    /// Entry with no priority configuration and no causes.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            priority: None,
            causes: SmallVec::new(),
        }
    }

    /// Set the configured base priority.
    pub fn with_priority(mut self, base: i32) -> Self {
        self.priority = Some(PriorityConfig::new(base));
        self
    }

    /// Attach one cause. Repeats of the same kind accumulate.
    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.causes.push(cause);
        self
    }
}

impl Buildable for BuildableItem {
    fn priority_config(&self) -> Option<PriorityConfig> {
        self.priority
    }

    fn causes(&self) -> &[Cause] {
        &self.causes
    }
}
