//! Dispatch-order sorting.

use std::cmp::Reverse;

use crate::config::WeightsHandle;

use super::{Buildable, CauseWeights, effective_priority};

// =============================================================================
// Sort
// =============================================================================

/// Order a queue for dispatch: highest effective priority first.
///
/// The key is computed once per element. The sort is stable, so tasks with
/// equal effective priority keep their relative input order — queue position
/// normally reflects arrival time, and equal-priority tasks should dispatch
/// roughly FIFO.
///
/// Sorting a mutable slice in place means the element count cannot change;
/// any N (including 0 and 1) succeeds, and identical inputs produce
/// identical orders.
pub fn sort_by_priority<T: Buildable>(items: &mut [T], weights: &CauseWeights) {
    items.sort_by_cached_key(|item| Reverse(effective_priority(item, weights)));
}

// =============================================================================
// QueueSorter
// =============================================================================

/// Host extension point: impose a dispatch order on a buildable set.
///
/// The host scheduler registers one implementation with its queue-maintenance
/// loop and invokes it every time it needs a fresh ordering. The contract is
/// "given a list, impose an order" — no elements dropped, duplicated, or
/// added, and no sort-session state between invocations.
pub trait QueueSorter<T: Buildable> {
    fn sort_buildable_items(&self, items: &mut [T]);
}

/// The cause-weighted sorter, bound to a shared weights handle.
///
/// Takes one weights snapshot per pass, so a sort can never observe a
/// half-applied administrative update even when a configuration change lands
/// mid-cycle.
pub struct PrioritySorter {
    weights: WeightsHandle,
}

impl PrioritySorter {
    pub fn new(weights: WeightsHandle) -> Self {
        Self { weights }
    }
}

impl<T: Buildable> QueueSorter<T> for PrioritySorter {
    fn sort_buildable_items(&self, items: &mut [T]) {
        let weights = self.weights.snapshot();
        sort_by_priority(items, &weights);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{BuildableItem, Cause};

    fn names(items: &[BuildableItem]) -> Vec<&str> {
        items.iter().map(|item| item.task.as_str()).collect()
    }

    #[test]
    fn test_unconfigured_beats_low_priority() {
        // T1 configured at 50, T2 unconfigured (resolves to 100)
        let mut queue = vec![
            BuildableItem::new("t1").with_priority(50),
            BuildableItem::new("t2"),
        ];

        sort_by_priority(&mut queue, &CauseWeights::default());
        assert_eq!(names(&queue), ["t2", "t1"]);
    }

    #[test]
    fn test_cause_weights_decide_between_equal_bases() {
        let weights = CauseWeights::new(10, 5, 1);
        let mut queue = vec![
            BuildableItem::new("scm-triggered")
                .with_priority(0)
                .with_cause(Cause::SourceChange),
            BuildableItem::new("user-triggered")
                .with_priority(0)
                .with_cause(Cause::UserInitiated),
        ];

        sort_by_priority(&mut queue, &weights);
        assert_eq!(names(&queue), ["user-triggered", "scm-triggered"]);
    }

    #[test]
    fn test_stable_on_ties() {
        // Both resolve to 100: a at base 100, b unconfigured
        let mut queue = vec![
            BuildableItem::new("a").with_priority(100),
            BuildableItem::new("b"),
        ];

        sort_by_priority(&mut queue, &CauseWeights::default());
        assert_eq!(names(&queue), ["a", "b"]);
    }

    #[test]
    fn test_stable_across_many_ties() {
        let mut queue: Vec<_> = (0..8)
            .map(|i| BuildableItem::new(format!("t{i}")).with_priority(if i % 2 == 0 { 5 } else { 9 }))
            .collect();

        sort_by_priority(&mut queue, &CauseWeights::default());
        assert_eq!(
            names(&queue),
            ["t1", "t3", "t5", "t7", "t0", "t2", "t4", "t6"]
        );
    }

    #[test]
    fn test_idempotent() {
        let weights = CauseWeights::new(3, 2, 1);
        let mut queue = vec![
            BuildableItem::new("a").with_priority(1).with_cause(Cause::Timer),
            BuildableItem::new("b"),
            BuildableItem::new("c").with_priority(200),
            BuildableItem::new("d").with_priority(1).with_cause(Cause::UserInitiated),
        ];

        sort_by_priority(&mut queue, &weights);
        let once = names(&queue).into_iter().map(String::from).collect::<Vec<_>>();

        sort_by_priority(&mut queue, &weights);
        assert_eq!(names(&queue), once);
    }

    #[test]
    fn test_preserves_membership() {
        let mut queue = vec![
            BuildableItem::new("a").with_priority(-3),
            BuildableItem::new("b").with_priority(7),
            BuildableItem::new("a").with_priority(-3),
        ];

        sort_by_priority(&mut queue, &CauseWeights::default());

        assert_eq!(queue.len(), 3);
        let mut sorted_names = names(&queue);
        sorted_names.sort_unstable();
        assert_eq!(sorted_names, ["a", "a", "b"]);
    }

    #[test]
    fn test_empty_and_singleton() {
        let mut empty: Vec<BuildableItem> = vec![];
        sort_by_priority(&mut empty, &CauseWeights::default());
        assert!(empty.is_empty());

        let mut one = vec![BuildableItem::new("only")];
        sort_by_priority(&mut one, &CauseWeights::default());
        assert_eq!(names(&one), ["only"]);
    }

    #[test]
    fn test_descending_order() {
        let mut queue = vec![
            BuildableItem::new("low").with_priority(-10),
            BuildableItem::new("high").with_priority(500),
            BuildableItem::new("default"),
            BuildableItem::new("mid").with_priority(50),
        ];

        sort_by_priority(&mut queue, &CauseWeights::default());
        assert_eq!(names(&queue), ["high", "default", "mid", "low"]);
    }

    #[test]
    fn test_priority_sorter_snapshots_handle() {
        let dir = tempfile::TempDir::new().unwrap();
        let handle = WeightsHandle::load(dir.path().join("priosort.toml")).unwrap();
        handle.store(CauseWeights::new(10, 5, 1)).unwrap();

        let sorter = PrioritySorter::new(handle);
        let mut queue = vec![
            BuildableItem::new("scm").with_priority(0).with_cause(Cause::SourceChange),
            BuildableItem::new("user").with_priority(0).with_cause(Cause::UserInitiated),
        ];

        sorter.sort_buildable_items(&mut queue);
        assert_eq!(names(&queue), ["user", "scm"]);
    }
}
