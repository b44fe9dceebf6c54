//! Free-slot search strategies for slot assignment.
//!
//! The greedy scheduler repeatedly asks for the latest free slot at or
//! before a job's deadline. Two interchangeable answers:
//!
//! - [`SlotStrategy::BackwardScan`]: linear probe downward from the
//!   deadline slot. O(n) per query, O(n²) worst case overall.
//! - [`SlotStrategy::DisjointSet`]: path-compressed next-free-slot
//!   index, amortized near-O(1) per query.
//!
//! Both return the same slot for the same query sequence.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 21
//! (disjoint-set forests)

use crate::models::Job;

/// How the scheduler locates the latest free slot for a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotStrategy {
    /// Probe backward one slot at a time from the deadline.
    #[default]
    BackwardScan,
    /// Union-find "next free slot at or below" index.
    DisjointSet,
}

/// Scans slots `start, start-1, …, 0` for the first empty one.
pub(super) fn scan_backward(slots: &[Job], start: usize) -> Option<usize> {
    (0..=start).rev().find(|&s| slots[s].is_empty())
}

/// Path-compressed index answering "latest free slot <= limit".
///
/// Internally indices `1..=n` stand for slots `0..n-1`; index `0` is
/// the exhausted marker. Acquiring slot `s` links index `s + 1` to
/// `s`, so later queries skip over occupied runs.
#[derive(Debug, Clone)]
pub(super) struct NextFreeSlot {
    parent: Vec<usize>,
}

impl NextFreeSlot {
    pub(super) fn new(slot_count: usize) -> Self {
        Self {
            parent: (0..=slot_count).collect(),
        }
    }

    /// Claims and returns the latest free slot `<= limit`, if any.
    pub(super) fn acquire(&mut self, limit: usize) -> Option<usize> {
        let root = self.find(limit + 1);
        if root == 0 {
            None
        } else {
            self.parent[root] = root - 1;
            Some(root - 1)
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // Path halving
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }
}
