//! The flattened work queue behind playback.

use std::collections::VecDeque;

use crate::seq::{Sequence, SignalId};

/// One unit of playback work.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum WorkItem {
    /// Activate this signal.
    Signal(SignalId),
    /// Cycle boundary: clear every active signal before moving on.
    CycleBreak,
}

/// A macro's sequence flattened into dequeue order.
///
/// Signals appear in authoring order, with one [`WorkItem::CycleBreak`]
/// between consecutive cycles and none after the last. Pausing simply stops
/// dequeuing, so the queue itself carries no timing state.
#[derive(Clone, Default, Debug)]
pub(crate) struct PlaybackQueue {
    items: VecDeque<WorkItem>,
}

impl PlaybackQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Flattens a sequence into a fresh queue.
    pub(crate) fn from_sequence(sequence: &Sequence) -> Self {
        let mut items = VecDeque::new();
        for (i, cycle) in sequence.iter().enumerate() {
            if i != 0 {
                items.push_back(WorkItem::CycleBreak);
            }
            items.extend(cycle.iter().cloned().map(WorkItem::Signal));
        }
        Self { items }
    }

    /// Peeks at the next work item without dequeuing it.
    pub(crate) fn front(&self) -> Option<&WorkItem> {
        self.items.front()
    }

    /// Dequeues the next work item.
    pub(crate) fn pop(&mut self) -> Option<WorkItem> {
        self.items.pop_front()
    }

    /// Discards all remaining work.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(cycles: &[&[&'static str]]) -> Sequence {
        cycles.iter()
            .map(|c| c.iter().copied().map(SignalId::from).collect())
            .collect()
    }

    #[test]
    fn breaks_sit_between_cycles_only() {
        let queue = PlaybackQueue::from_sequence(&seq(&[
            &["a", "b", "c"],
            &["d", "e", "f"],
            &["g", "h", "i"],
        ]));

        assert_eq!(queue.len(), 11);
        let breaks: Vec<_> = queue.items.iter()
            .enumerate()
            .filter(|(_, item)| **item == WorkItem::CycleBreak)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(breaks, vec![3, 7]);
    }

    #[test]
    fn item_count_is_signals_plus_cycle_gaps() {
        let sequence = seq(&[&["a"], &["b", "c"], &["d", "e", "f"], &["g"]]);
        let queue = PlaybackQueue::from_sequence(&sequence);
        assert_eq!(queue.len(), 7 + 3);
    }

    #[test]
    fn single_cycle_has_no_breaks() {
        let queue = PlaybackQueue::from_sequence(&seq(&[&["a", "b"]]));
        assert_eq!(queue.len(), 2);
        assert!(queue.items.iter().all(|item| *item != WorkItem::CycleBreak));
    }

    #[test]
    fn empty_sequence_is_an_empty_queue() {
        let queue = PlaybackQueue::from_sequence(&seq(&[]));
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
    }

    #[test]
    fn empty_cycles_still_mark_their_boundaries() {
        let queue = PlaybackQueue::from_sequence(&seq(&[&["a"], &[], &["b"]]));
        let items: Vec<_> = queue.items.iter().cloned().collect();
        assert_eq!(items, vec![
            WorkItem::Signal(SignalId::from("a")),
            WorkItem::CycleBreak,
            WorkItem::CycleBreak,
            WorkItem::Signal(SignalId::from("b")),
        ]);
    }

    #[test]
    fn pop_preserves_authoring_order() {
        let mut queue = PlaybackQueue::from_sequence(&seq(&[&["a", "b"], &["c"]]));
        assert_eq!(queue.pop(), Some(WorkItem::Signal(SignalId::from("a"))));
        assert_eq!(queue.pop(), Some(WorkItem::Signal(SignalId::from("b"))));
        assert_eq!(queue.pop(), Some(WorkItem::CycleBreak));
        assert_eq!(queue.pop(), Some(WorkItem::Signal(SignalId::from("c"))));
        assert_eq!(queue.pop(), None);
    }
}
