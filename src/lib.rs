//! Priosort - cause-weighted priority ordering for build queues.
//!
//! Given a set of pending, buildable tasks, produce the total order in which
//! they should dispatch: each task resolves to one effective priority (its
//! configured base adjusted once per trigger cause, or a default of 100 when
//! unconfigured), and a stable descending sort keeps equal-priority tasks in
//! arrival order.
//!
//! The core ([`queue`]) is pure and host-agnostic: a scheduler implements
//! [`Buildable`] on its task type and calls [`sort_by_priority`], or
//! registers a [`PrioritySorter`] bound to a shared [`WeightsHandle`] with
//! its queue-maintenance loop. The [`config`] layer owns weight persistence;
//! the [`cli`] module is the administrative surface over it.
//!
//! # Example
//!
//! ```
//! use priosort::{BuildableItem, Cause, CauseWeights, sort_by_priority};
//!
//! let weights = CauseWeights::new(10, 5, 1);
//! let mut queue = vec![
//!     BuildableItem::new("nightly").with_priority(0).with_cause(Cause::Timer),
//!     BuildableItem::new("hotfix").with_priority(0).with_cause(Cause::UserInitiated),
//!     BuildableItem::new("docs"),
//! ];
//!
//! sort_by_priority(&mut queue, &weights);
//!
//! // Unconfigured tasks resolve to 100 and dispatch first here
//! let order: Vec<_> = queue.iter().map(|item| item.task.as_str()).collect();
//! assert_eq!(order, ["docs", "hotfix", "nightly"]);
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod queue;

pub use config::{ConfigError, SorterConfig, WeightsHandle};
pub use queue::{
    Buildable, BuildableItem, Cause, CauseWeights, DEFAULT_PRIORITY, PriorityConfig,
    PrioritySorter, QueueSorter, effective_priority, sort_by_priority,
};
