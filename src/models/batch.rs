//! Job batch model.
//!
//! A batch is the immutable input to the scheduler: a fixed-size,
//! ordered collection of jobs. Batches are constructed either from
//! parallel deadline/weight arrays or accumulated through
//! [`JobBatchBuilder`]; both assign identities `1..=n` in input order.
//!
//! The scheduler never accepts a mutable collection — a batch is a
//! snapshot, sized once at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Job;

/// Deadline/weight input arrays differ in length.
///
/// Raised at batch construction; no partial batch is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputShapeError {
    /// Number of deadlines supplied.
    pub deadlines: usize,
    /// Number of weights supplied.
    pub weights: usize,
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deadline/weight count mismatch: {} deadlines, {} weights",
            self.deadlines, self.weights
        )
    }
}

impl std::error::Error for InputShapeError {}

/// An immutable, fixed-size batch of jobs.
///
/// Job identities are 1-based and unique within the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBatch {
    jobs: Vec<Job>,
}

impl JobBatch {
    /// Builds a batch from parallel deadline and weight arrays.
    ///
    /// Job `i` (0-based input position) receives identity `i + 1`.
    ///
    /// # Errors
    /// [`InputShapeError`] if the arrays differ in length.
    pub fn from_arrays(deadlines: &[i64], weights: &[u64]) -> Result<Self, InputShapeError> {
        if deadlines.len() != weights.len() {
            return Err(InputShapeError {
                deadlines: deadlines.len(),
                weights: weights.len(),
            });
        }

        let jobs = deadlines
            .iter()
            .zip(weights)
            .enumerate()
            .map(|(i, (&d, &w))| Job::new(i as u32 + 1, d, w))
            .collect();

        Ok(Self { jobs })
    }

    /// Number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the batch contains no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The jobs in input order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

/// Accumulates jobs into an immutable [`JobBatch`] snapshot.
///
/// # Example
/// ```
/// use u_sequence::models::JobBatchBuilder;
///
/// let batch = JobBatchBuilder::new()
///     .with_job(4, 6)
///     .with_job(1, 8)
///     .build();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.jobs()[1].id, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobBatchBuilder {
    jobs: Vec<(i64, u64)>,
}

impl JobBatchBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job with the given deadline and weight.
    pub fn with_job(mut self, deadline: i64, weight: u64) -> Self {
        self.jobs.push((deadline, weight));
        self
    }

    /// Produces the immutable batch, assigning identities in
    /// insertion order.
    pub fn build(self) -> JobBatch {
        let jobs = self
            .jobs
            .into_iter()
            .enumerate()
            .map(|(i, (d, w))| Job::new(i as u32 + 1, d, w))
            .collect();
        JobBatch { jobs }
    }
}
