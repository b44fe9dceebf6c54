//! Structural validation of computed schedules.
//!
//! Checks that an [`OptimalSchedule`] is a well-formed canonical-form
//! permutation of its input batch. Detects:
//! - Length mismatch against the batch
//! - Empty sentinel jobs leaking into the output
//! - Missing or duplicated job identities
//! - On-time prefix out of deadline order
//! - Declared prefix/suffix split disagreeing with the positional
//!   deadline check

use crate::models::{JobBatch, OptimalSchedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Schedule length differs from batch size.
    LengthMismatch,
    /// The empty sentinel appears in the output.
    SentinelJob,
    /// The output is not a permutation of the batch identities.
    NotAPermutation,
    /// On-time prefix deadlines are not non-decreasing.
    UnsortedPrefix,
    /// A position's declared classification disagrees with its
    /// deadline.
    MisclassifiedPosition,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a computed schedule against its input batch.
///
/// Checks:
/// 1. Schedule and batch have the same length
/// 2. No empty sentinel jobs remain in the output
/// 3. The output identities are a permutation of the batch identities
/// 4. The on-time prefix is sorted by non-decreasing deadline
/// 5. Every prefix position is feasible (`deadline >= position + 1`)
///    and every suffix position is not
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(batch: &JobBatch, schedule: &OptimalSchedule) -> ValidationResult {
    let mut errors = Vec::new();

    if schedule.len() != batch.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "schedule has {} jobs, batch has {}",
                schedule.len(),
                batch.len()
            ),
        ));
    }

    for (i, job) in schedule.jobs().iter().enumerate() {
        if job.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SentinelJob,
                format!("empty sentinel at position {i}"),
            ));
        }
    }

    let mut batch_ids: Vec<u32> = batch.jobs().iter().map(|job| job.id).collect();
    let mut schedule_ids: Vec<u32> = schedule.jobs().iter().map(|job| job.id).collect();
    batch_ids.sort_unstable();
    schedule_ids.sort_unstable();
    if batch_ids != schedule_ids {
        errors.push(ValidationError::new(
            ValidationErrorKind::NotAPermutation,
            "schedule identities do not match batch identities",
        ));
    }

    let prefix = schedule.on_time_jobs();
    for pair in prefix.windows(2) {
        if pair[0].deadline > pair[1].deadline {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsortedPrefix,
                format!(
                    "job {} (deadline {}) precedes job {} (deadline {})",
                    pair[0].id, pair[0].deadline, pair[1].id, pair[1].deadline
                ),
            ));
        }
    }

    let split = prefix.len();
    for (i, job) in schedule.jobs().iter().enumerate() {
        let declared_on_time = i < split;
        if declared_on_time != schedule.is_on_time(i) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MisclassifiedPosition,
                format!(
                    "job {} at position {i} (deadline {}) declared {}",
                    job.id,
                    job.deadline,
                    if declared_on_time { "on time" } else { "late" }
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
