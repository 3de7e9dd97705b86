//! The priority frontier: a min-ordered worklist of path candidates.

use std::collections::BinaryHeap;

use gridpath_core::Coord;

/// A discovered-but-not-finalized cell awaiting expansion.
///
/// `key` is the ordering key (equal to `cost` for Dijkstra, `cost`
/// plus a heuristic for A*); `cost` is the cumulative cost actually
/// paid to reach `cell`, used for the lazy stale check at extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub key: i32,
    pub cost: i32,
    pub cell: Coord,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct HeapSlot {
    entry: FrontierEntry,
    seq: u64,
}

impl Ord for HeapSlot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest key
        // first; equal keys resolve in insertion order.
        other
            .entry
            .key
            .cmp(&self.entry.key)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapSlot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of [`FrontierEntry`] values.
///
/// No deduplication is performed: a cell may be pushed again every time
/// a cheaper path to it is found, and stale entries are skipped lazily
/// by the search loop at extraction. Ties on the ordering key break by
/// insertion order (a monotone sequence number), so traces are
/// reproducible. Push and pop are O(log n).
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<HeapSlot>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate.
    pub fn push(&mut self, entry: FrontierEntry) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(HeapSlot { entry, seq });
    }

    /// Remove and return the entry with the smallest key.
    ///
    /// `None` signals an exhausted frontier, which is the search loop's
    /// termination condition, not an error.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|s| s.entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
