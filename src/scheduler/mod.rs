//! Matroid-greedy scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! [`MatroidScheduler`] ranks jobs by descending weight and admits
//! each into the latest free slot at or before its deadline. Because
//! the on-time-feasible subsets form a matroid, the greedy selection
//! is optimal: no other feasible subset has a larger total weight.
//!
//! # KPI
//!
//! [`SequenceKpi`] aggregates penalty, on-time weight, counts, and the
//! on-time rate from a computed schedule.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! - Lawler (1976), "Combinatorial Optimization: Networks and Matroids"

mod kpi;
mod matroid;
mod slots;

pub use kpi::SequenceKpi;
pub use matroid::{compute_optimal_schedule, ConsistencyError, MatroidScheduler};
pub use slots::SlotStrategy;
