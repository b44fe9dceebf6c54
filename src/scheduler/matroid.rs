//! Matroid-greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Rank jobs by weight, descending (stable: equal weights keep
//!    input order).
//! 2. For each ranked job, claim the latest free slot at or before its
//!    deadline; jobs with no free slot join the late list.
//! 3. Compact filled slots into a contiguous prefix, preserving order.
//! 4. Sort the prefix by ascending deadline and append the late list.
//!
//! The on-time-feasible subsets form a matroid, so step 2 admits a
//! maximum-weight independent set.
//!
//! # Complexity
//! O(n log n) for the sorts; slot assignment is O(n²) worst case with
//! [`SlotStrategy::BackwardScan`], amortized near-O(n) with
//! [`SlotStrategy::DisjointSet`].
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5

use std::fmt;

use super::slots::{scan_backward, NextFreeSlot, SlotStrategy};
use crate::models::{Job, JobBatch, OptimalSchedule};

/// An internal invariant was violated during scheduling.
///
/// Fatal: the computation aborts rather than return a partially
/// correct schedule. Neither variant is reachable through the public
/// API when slot assignment behaves per its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// Compaction found a different number of empty slots than there
    /// are recorded late jobs.
    EmptySlotMismatch {
        /// Late-list length.
        expected: usize,
        /// Empty slots actually found.
        found: usize,
    },
    /// The late list grew past the batch size.
    LateListOverflow {
        /// Batch size bounding the list.
        capacity: usize,
    },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySlotMismatch { expected, found } => write!(
                f,
                "compaction expected {expected} empty slots, found {found}"
            ),
            Self::LateListOverflow { capacity } => {
                write!(f, "late list exceeded batch size {capacity}")
            }
        }
    }
}

impl std::error::Error for ConsistencyError {}

/// Greedy scheduler for unit-time jobs with deadlines and weights.
///
/// Produces a permutation of the batch in canonical form: on-time jobs
/// first (ascending deadline), late jobs after (detection order).
/// Deterministic — identical input yields an identical schedule.
///
/// # Example
///
/// ```
/// use u_sequence::models::JobBatch;
/// use u_sequence::scheduler::MatroidScheduler;
///
/// let batch = JobBatch::from_arrays(&[2, 1, 1], &[10, 20, 30]).unwrap();
/// let schedule = MatroidScheduler::new().compute(&batch).unwrap();
///
/// // Job 3 (weight 30) wins slot 1; job 1 fits behind it; job 2 is late.
/// assert_eq!(schedule.total_penalty(), 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatroidScheduler {
    strategy: SlotStrategy,
}

impl MatroidScheduler {
    /// Creates a scheduler with the default backward-scan probing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-slot search strategy.
    pub fn with_strategy(mut self, strategy: SlotStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Computes the optimal schedule for a batch.
    ///
    /// The result contains every input job exactly once and maximizes
    /// the total weight of on-time jobs.
    ///
    /// # Errors
    /// [`ConsistencyError`] on an internal invariant breach; this
    /// indicates a defect in the scheduler itself, not bad input.
    pub fn compute(&self, batch: &JobBatch) -> Result<OptimalSchedule, ConsistencyError> {
        let mut ranked = batch.jobs().to_vec();
        // Stable sort: ties between equal weights keep input order,
        // which makes the output reproducible.
        ranked.sort_by(|a, b| b.weight.cmp(&a.weight));

        let (mut slots, late) = self.assign_slots(&ranked)?;
        let on_time = compact(&mut slots, late.len())?;

        // The sort must land back in the prefix itself; discarding the
        // ordered result would leave the prefix in slot order.
        slots[..on_time].sort_by_key(|job| job.deadline);
        slots[on_time..].copy_from_slice(&late);

        Ok(OptimalSchedule::new(slots, on_time))
    }

    /// Places each ranked job into the latest free slot at or before
    /// its deadline, or onto the late list if none exists.
    ///
    /// A deadline beyond the batch size behaves like a deadline of
    /// exactly the batch size; a non-positive deadline can never be
    /// placed.
    fn assign_slots(&self, ranked: &[Job]) -> Result<(Vec<Job>, Vec<Job>), ConsistencyError> {
        let n = ranked.len();
        let mut slots = vec![Job::empty(); n];
        let mut late = Vec::new();
        let mut free_index = match self.strategy {
            SlotStrategy::DisjointSet => Some(NextFreeSlot::new(n)),
            SlotStrategy::BackwardScan => None,
        };

        for &job in ranked {
            let limit = job.deadline.min(n as i64) - 1;
            let found = if limit < 0 {
                None
            } else {
                match free_index.as_mut() {
                    Some(index) => index.acquire(limit as usize),
                    None => scan_backward(&slots, limit as usize),
                }
            };

            match found {
                Some(slot) => slots[slot] = job,
                None => {
                    if late.len() == n {
                        return Err(ConsistencyError::LateListOverflow { capacity: n });
                    }
                    late.push(job);
                }
            }
        }

        Ok((slots, late))
    }
}

/// Computes the optimal schedule with the default scheduler.
pub fn compute_optimal_schedule(batch: &JobBatch) -> Result<OptimalSchedule, ConsistencyError> {
    MatroidScheduler::new().compute(batch)
}

/// Moves filled slots into a contiguous prefix, preserving their
/// relative order, and returns the prefix length.
///
/// Fails if the number of empty slots disagrees with the recorded
/// late-job count — a broken phase-2 invariant.
fn compact(slots: &mut [Job], expected_empty: usize) -> Result<usize, ConsistencyError> {
    let mut write = 0;
    for read in 0..slots.len() {
        if !slots[read].is_empty() {
            slots.swap(read, write);
            write += 1;
        }
    }

    let found = slots.len() - write;
    if found != expected_empty {
        return Err(ConsistencyError::EmptySlotMismatch {
            expected: expected_empty,
            found,
        });
    }
    Ok(write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Exhaustive subset search: the maximum achievable on-time weight.
    ///
    /// A subset is feasible iff, ordered by deadline, every job's
    /// deadline covers its completion slot.
    fn brute_force_best_weight(batch: &JobBatch) -> u64 {
        let jobs = batch.jobs();
        let n = jobs.len();
        assert!(n <= 16, "exhaustive search only for small batches");

        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let mut subset: Vec<Job> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| jobs[i])
                .collect();
            subset.sort_by_key(|job| job.deadline);

            let feasible = subset
                .iter()
                .enumerate()
                .all(|(i, job)| job.deadline >= i as i64 + 1);
            if feasible {
                best = best.max(subset.iter().map(|job| job.weight).sum());
            }
        }
        best
    }

    fn ids(jobs: &[Job]) -> Vec<u32> {
        jobs.iter().map(|job| job.id).collect()
    }

    fn homework_batch() -> JobBatch {
        JobBatch::from_arrays(&[4, 4, 5, 4, 3, 5, 1, 8, 7, 1], &[6, 4, 8, 1, 10, 4, 8, 2, 3, 7])
            .unwrap()
    }

    #[test]
    fn test_homework_scenario() {
        let batch = homework_batch();
        let schedule = compute_optimal_schedule(&batch).unwrap();

        assert_eq!(ids(schedule.jobs()), vec![7, 5, 2, 1, 3, 9, 8, 10, 6, 4]);
        assert_eq!(schedule.on_time_jobs().len(), 7);
        assert_eq!(schedule.total_penalty(), 12);
        assert_eq!(schedule.on_time_weight(), 41);
        assert_eq!(schedule.on_time_weight(), brute_force_best_weight(&batch));
    }

    #[test]
    fn test_empty_batch() {
        let batch = JobBatch::from_arrays(&[], &[]).unwrap();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.total_penalty(), 0);
    }

    #[test]
    fn test_single_job_on_time() {
        let batch = JobBatch::from_arrays(&[1], &[5]).unwrap();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        assert_eq!(schedule.on_time_jobs().len(), 1);
        assert_eq!(schedule.total_penalty(), 0);
    }

    #[test]
    fn test_single_job_impossible_deadline() {
        for deadline in [0, -1, -100] {
            let batch = JobBatch::from_arrays(&[deadline], &[5]).unwrap();
            let schedule = compute_optimal_schedule(&batch).unwrap();
            assert!(schedule.on_time_jobs().is_empty());
            assert_eq!(schedule.total_penalty(), 5);
        }
    }

    #[test]
    fn test_deadline_beyond_batch_size() {
        // A deadline of 100 places like a deadline of 3 here.
        let batch = JobBatch::from_arrays(&[100, 100, 100], &[1, 2, 3]).unwrap();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        assert_eq!(schedule.on_time_jobs().len(), 3);
        assert_eq!(schedule.total_penalty(), 0);
    }

    #[test]
    fn test_all_late() {
        let batch = JobBatch::from_arrays(&[0, 0, -3], &[4, 7, 2]).unwrap();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        assert!(schedule.on_time_jobs().is_empty());
        assert_eq!(schedule.total_penalty(), 13);
        // Late suffix in ranked detection order: heaviest first here.
        assert_eq!(ids(schedule.late_jobs()), vec![2, 1, 3]);
    }

    #[test]
    fn test_stable_tie_break() {
        // Equal weights: insertion order decides who wins the slot.
        let batch = JobBatch::from_arrays(&[1, 1], &[5, 5]).unwrap();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        assert_eq!(schedule.on_time_jobs()[0].id, 1);
        assert_eq!(schedule.late_jobs()[0].id, 2);
    }

    #[test]
    fn test_permutation_property() {
        let batch = homework_batch();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        let mut seen = ids(schedule.jobs());
        seen.sort_unstable();
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_prefix_sorted_by_deadline() {
        let batch = homework_batch();
        let schedule = compute_optimal_schedule(&batch).unwrap();
        let prefix = schedule.on_time_jobs();
        assert!(prefix.windows(2).all(|w| w[0].deadline <= w[1].deadline));
    }

    #[test]
    fn test_determinism() {
        let batch = homework_batch();
        let first = compute_optimal_schedule(&batch).unwrap();
        let second = compute_optimal_schedule(&batch).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_optimality_small_cases() {
        let cases: &[(&[i64], &[u64])] = &[
            (&[1, 1, 1], &[3, 2, 1]),
            (&[2, 2, 2, 2], &[1, 1, 1, 1]),
            (&[1, 2, 3, 4], &[10, 20, 30, 40]),
            (&[3, 1, 2, 1], &[5, 9, 2, 7]),
            (&[2, 2, 1, 3, 3], &[8, 6, 9, 1, 1]),
        ];

        for (deadlines, weights) in cases {
            let batch = JobBatch::from_arrays(deadlines, weights).unwrap();
            let schedule = compute_optimal_schedule(&batch).unwrap();
            assert_eq!(
                schedule.on_time_weight(),
                brute_force_best_weight(&batch),
                "deadlines {deadlines:?}, weights {weights:?}"
            );
        }
    }

    #[test]
    fn test_strategies_agree_on_homework() {
        let batch = homework_batch();
        let scanned = MatroidScheduler::new().compute(&batch).unwrap();
        let indexed = MatroidScheduler::new()
            .with_strategy(SlotStrategy::DisjointSet)
            .compute(&batch)
            .unwrap();
        assert_eq!(scanned, indexed);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            input in proptest::collection::vec((-2i64..15, 0u64..100), 0..10)
        ) {
            let (deadlines, weights): (Vec<i64>, Vec<u64>) = input.into_iter().unzip();
            let batch = JobBatch::from_arrays(&deadlines, &weights).unwrap();
            let schedule = compute_optimal_schedule(&batch).unwrap();
            prop_assert_eq!(schedule.on_time_weight(), brute_force_best_weight(&batch));
        }

        #[test]
        fn prop_permutation_and_determinism(
            input in proptest::collection::vec((-2i64..15, 0u64..100), 0..24)
        ) {
            let (deadlines, weights): (Vec<i64>, Vec<u64>) = input.into_iter().unzip();
            let batch = JobBatch::from_arrays(&deadlines, &weights).unwrap();
            let schedule = compute_optimal_schedule(&batch).unwrap();

            let mut seen: Vec<u32> = schedule.jobs().iter().map(|j| j.id).collect();
            seen.sort_unstable();
            let expected: Vec<u32> = (1..=batch.len() as u32).collect();
            prop_assert_eq!(seen, expected);

            prop_assert_eq!(&schedule, &compute_optimal_schedule(&batch).unwrap());
        }

        #[test]
        fn prop_strategies_agree(
            input in proptest::collection::vec((-2i64..30, 0u64..100), 0..24)
        ) {
            let (deadlines, weights): (Vec<i64>, Vec<u64>) = input.into_iter().unzip();
            let batch = JobBatch::from_arrays(&deadlines, &weights).unwrap();
            let scanned = MatroidScheduler::new().compute(&batch).unwrap();
            let indexed = MatroidScheduler::new()
                .with_strategy(SlotStrategy::DisjointSet)
                .compute(&batch)
                .unwrap();
            prop_assert_eq!(scanned, indexed);
        }
    }
}
