//! Schedule quality metrics (KPIs).
//!
//! Aggregates the quantities a consumer derives from a computed
//! schedule. No formatting or printing — presentation belongs to the
//! caller.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Penalty | Sum of weights at late positions |
//! | On-Time Weight | Sum of weights at on-time positions |
//! | On-Time Rate | Fraction of jobs meeting their deadline |
//! | Max Late Weight | Heaviest single late job |

use crate::models::OptimalSchedule;

/// Aggregate quality numbers for a computed schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceKpi {
    /// Sum of weights at late positions.
    pub total_penalty: u64,
    /// Sum of weights at on-time positions.
    pub on_time_weight: u64,
    /// Jobs completing by their deadline.
    pub on_time_count: usize,
    /// Jobs missing their deadline.
    pub late_count: usize,
    /// Fraction of jobs on time (0.0..1.0); 1.0 for an empty schedule.
    pub on_time_rate: f64,
    /// Weight of the heaviest late job; 0 if none are late.
    pub max_late_weight: u64,
}

impl SequenceKpi {
    /// Computes KPIs from a schedule.
    ///
    /// Classification is positional: the job at position `i` is on
    /// time iff `deadline >= i + 1`.
    pub fn calculate(schedule: &OptimalSchedule) -> Self {
        let mut total_penalty: u64 = 0;
        let mut on_time_weight: u64 = 0;
        let mut on_time_count: usize = 0;
        let mut max_late_weight: u64 = 0;

        for (i, job) in schedule.jobs().iter().enumerate() {
            if schedule.is_on_time(i) {
                on_time_count += 1;
                on_time_weight += job.weight;
            } else {
                total_penalty += job.weight;
                max_late_weight = max_late_weight.max(job.weight);
            }
        }

        let late_count = schedule.len() - on_time_count;
        let on_time_rate = if schedule.is_empty() {
            1.0
        } else {
            on_time_count as f64 / schedule.len() as f64
        };

        Self {
            total_penalty,
            on_time_weight,
            on_time_count,
            late_count,
            on_time_rate,
            max_late_weight,
        }
    }
}
