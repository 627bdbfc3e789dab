//! Priority frontier shared by the best-first and beam strategies.
//!
//! Entries are ordered by total estimated cost `g + h`, lowest first. Ties go
//! to the entry inserted earliest, which makes the ordering a strict total
//! order and the search deterministic for a given input.

use crate::node::NodeId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node handle with the key it is ordered by.
///
/// Used with `BinaryHeap` (max-heap), so `Ord` is reversed: the entry with the
/// lowest cost, then the lowest sequence number, compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub total_cost: u32,
    seq: u64,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total_cost
            .cmp(&self.total_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` with priority `total_cost`. Later pushes lose ties.
    pub fn push(&mut self, node: NodeId, total_cost: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            node,
            total_cost,
            seq,
        });
    }

    /// Removes and returns the entry with the lowest total cost.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// The entry the next [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek()
    }

    /// Number of entries still waiting to be examined.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Keeps the `k` best entries and drops the rest for good.
    ///
    /// Returns how many entries were discarded.
    pub fn truncate(&mut self, k: usize) -> usize {
        if self.heap.len() <= k {
            return 0;
        }
        let discarded = self.heap.len() - k;
        let mut kept = Vec::with_capacity(k);
        while kept.len() < k {
            match self.heap.pop() {
                Some(entry) => kept.push(entry),
                None => break,
            }
        }
        self.heap = BinaryHeap::from(kept);
        discarded
    }
}
