//! Weighted job sequencing with deadlines for the U-Engine ecosystem.
//!
//! Computes an optimal subset and ordering of unit-time, single-machine
//! jobs — each with an integer deadline and a weight — maximizing the
//! total weight of jobs completed on time (equivalently, minimizing the
//! total penalty of late jobs). The family of on-time-feasible job
//! subsets forms a matroid, so greedy-by-weight selection yields a
//! maximum-weight independent set.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `JobBatch`, `JobBatchBuilder`,
//!   `OptimalSchedule`
//! - **`scheduler`**: The matroid-greedy scheduler, slot-probing
//!   strategies, and KPI metrics
//! - **`validation`**: Structural checks on computed schedules
//!   (permutation, prefix ordering, feasibility)
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! It is purely sequential and deterministic: no I/O, no randomness,
//! no shared state. Presentation (tables, CLI) belongs to consumers.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5:
//!   A task-scheduling problem as a matroid
//! - Lawler (1976), "Combinatorial Optimization: Networks and Matroids"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod validation;
