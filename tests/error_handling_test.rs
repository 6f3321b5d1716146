use chrono::NaiveDate;
use examplan::PlanError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_empty_input_display() {
    let error = PlanError::EmptyInput;
    assert_eq!(error.to_string(), "no topics provided");
}

#[test]
fn test_invalid_date_names_both_dates() {
    let error = PlanError::InvalidDate {
        exam_date: date(2026, 3, 1),
        today: date(2026, 3, 5),
    };
    let display = error.to_string();
    assert!(display.contains("2026-03-01"));
    assert!(display.contains("2026-03-05"));
}

#[test]
fn test_insufficient_time_names_the_budget() {
    let error = PlanError::InsufficientTime { total_minutes: 0 };
    assert!(error.to_string().contains("0 minutes"));
}

#[test]
fn test_errors_are_comparable() {
    assert_eq!(PlanError::EmptyInput, PlanError::EmptyInput);
    assert_ne!(
        PlanError::EmptyInput,
        PlanError::InsufficientTime { total_minutes: 0 }
    );
}
