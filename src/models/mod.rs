//! Sequencing domain models.
//!
//! Core data types for the weighted job sequencing problem:
//! unit-time jobs with deadlines and weights, immutable input batches,
//! and the canonical-form schedule the scheduler produces.

mod batch;
mod job;
mod schedule;

pub use batch::{InputShapeError, JobBatch, JobBatchBuilder};
pub use job::Job;
pub use schedule::OptimalSchedule;
