//! Job model.
//!
//! A job is a unit-time piece of work with a completion deadline and a
//! weight. Weight is the penalty incurred if the job finishes late,
//! and the quantity maximized when it finishes on time.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5

use serde::{Deserialize, Serialize};

/// A unit-time job with a deadline and a weight.
///
/// Jobs are small immutable value types; they are copied freely and
/// never mutated after creation.
///
/// # Time Representation
/// Slots are 1-based time units: a job at 0-based output position `i`
/// completes at time `i + 1`, so it is on time iff `deadline >= i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identity within a batch, 1-based. `0` is reserved for
    /// the empty sentinel.
    pub id: u32,
    /// Latest 1-based slot by which the job must complete. Values
    /// `<= 0` can never be met.
    pub deadline: i64,
    /// Penalty if late; objective contribution if on time.
    pub weight: u64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: u32, deadline: i64, weight: u64) -> Self {
        Self {
            id,
            deadline,
            weight,
        }
    }

    /// The empty sentinel marking an unfilled slot.
    pub fn empty() -> Self {
        Self {
            id: 0,
            deadline: 0,
            weight: 0,
        }
    }

    /// Whether this is the empty sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}
