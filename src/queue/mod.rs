//! Queue ordering core.
//!
//! Pure priority computation and comparison for build queues: resolve one
//! integer per buildable task, then stable-sort descending so ties dispatch
//! in arrival order.
//!
//! # Module Structure
//!
//! - [`cause`]: trigger cause classification
//! - [`weights`]: per-cause priority adjustments
//! - [`item`]: the [`Buildable`] view and the [`BuildableItem`] carrier
//! - [`priority`]: effective priority resolution
//! - [`sorter`]: the sort itself and the host-facing [`QueueSorter`] trait

mod cause;
mod item;
mod priority;
mod sorter;
mod weights;

pub use cause::Cause;
pub use item::{Buildable, BuildableItem, PriorityConfig};
pub use priority::{DEFAULT_PRIORITY, effective_priority};
pub use sorter::{PrioritySorter, QueueSorter, sort_by_priority};
pub use weights::CauseWeights;
