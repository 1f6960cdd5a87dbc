//! Effective priority resolution.

use super::{Buildable, CauseWeights};

/// Priority assumed for tasks with no configuration.
///
/// Higher value = dispatched sooner. The default intentionally sits well
/// above zero so that explicitly configured low-priority tasks (base 0 or
/// negative) stay behind unconfigured ones — "no priority set" is a safe
/// mid/high default, not a penalty.
pub const DEFAULT_PRIORITY: i32 = 100;

/// Resolve the single integer used to rank a task for dispatch.
///
/// Unconfigured tasks resolve to [`DEFAULT_PRIORITY`] regardless of causes.
/// Configured tasks start from their base priority and add the weight of
/// every attached cause; repeated causes accumulate. Arithmetic wraps at
/// the i32 boundary — these are small human-configured numbers.
///
/// Pure and total: every input resolves to an integer, an empty cause list
/// contributes zero, and neither `task` nor `weights` is mutated.
pub fn effective_priority<T: Buildable>(task: &T, weights: &CauseWeights) -> i32 {
    let Some(config) = task.priority_config() else {
        return DEFAULT_PRIORITY;
    };

    task.causes()
        .iter()
        .fold(config.base, |acc, &cause| {
            acc.wrapping_add(weights.weight_for(cause))
        })
}
