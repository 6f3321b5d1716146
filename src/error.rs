use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type for plan construction.
///
/// All three errors are raised before any working state is built, so a
/// failed call never yields a partial plan. Unrecognized difficulty labels
/// are not an error anywhere; they normalize to medium.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The topic text parsed to an empty list.
    #[error("no topics provided")]
    EmptyInput,

    /// The exam date is not strictly in the future.
    #[error("exam date {exam_date} must be after {today}")]
    InvalidDate {
        exam_date: NaiveDate,
        today: NaiveDate,
    },

    /// The computed time budget is empty (reachable via zero daily hours).
    #[error("insufficient study time: {total_minutes} minutes available")]
    InsufficientTime { total_minutes: i64 },
}
