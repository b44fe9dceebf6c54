//! Optimal schedule (solution) model.
//!
//! The result of the matroid-greedy computation: a permutation of the
//! input batch in canonical form — on-time jobs first, sorted by
//! ascending deadline, late jobs appended after.
//!
//! Classification is positional: the job at 0-based position `i`
//! completes at time `i + 1` and is on time iff `deadline >= i + 1`.
//! Penalty totals are always derived from the final concatenated
//! sequence, never from intermediate state.

use serde::{Deserialize, Serialize};

use super::Job;

/// A computed schedule: a permutation of the batch in canonical form.
///
/// The on-time jobs occupy a contiguous prefix ordered by
/// non-decreasing deadline; the late jobs occupy the suffix in the
/// order their infeasibility was detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSchedule {
    jobs: Vec<Job>,
    on_time: usize,
}

impl OptimalSchedule {
    pub(crate) fn new(jobs: Vec<Job>, on_time: usize) -> Self {
        debug_assert!(on_time <= jobs.len());
        Self { jobs, on_time }
    }

    /// The full job sequence: on-time prefix, then late suffix.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Number of jobs in the schedule.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The jobs that complete by their deadline, ascending by deadline.
    pub fn on_time_jobs(&self) -> &[Job] {
        &self.jobs[..self.on_time]
    }

    /// The jobs that cannot meet any deadline, in detection order.
    pub fn late_jobs(&self) -> &[Job] {
        &self.jobs[self.on_time..]
    }

    /// Whether the job at `position` completes by its deadline.
    ///
    /// Position `i` corresponds to completion time `i + 1`.
    pub fn is_on_time(&self, position: usize) -> bool {
        self.jobs[position].deadline >= position as i64 + 1
    }

    /// Sum of weights at late positions.
    pub fn total_penalty(&self) -> u64 {
        self.positional_weight(false)
    }

    /// Sum of weights at on-time positions.
    pub fn on_time_weight(&self) -> u64 {
        self.positional_weight(true)
    }

    fn positional_weight(&self, on_time: bool) -> u64 {
        self.jobs
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_on_time(*i) == on_time)
            .map(|(_, job)| job.weight)
            .sum()
    }
}
