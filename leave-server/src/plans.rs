//! Annual-plan validation
//!
//! A plan is valid only when it uses the yearly allotment exactly.
//! Each failure mode has its own error code so clients can tell the
//! user precisely what to fix.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use shared::{AppError, AppResult, ErrorCode};

/// Validate a plan submission against the user's yearly allotment
///
/// Returns the deduplicated, sorted days on success. Checks, in order:
/// 1. the plan must not be empty
/// 2. HR must have set the allotment
/// 3. the distinct day count must equal the allotment exactly
pub fn validate_submission(dates: &[NaiveDate], allotment: u32) -> AppResult<Vec<NaiveDate>> {
    if dates.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyPlan));
    }
    if allotment == 0 {
        return Err(AppError::new(ErrorCode::AllotmentNotSet));
    }

    let distinct: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let used = distinct.len() as u32;

    if used < allotment {
        return Err(AppError::new(ErrorCode::NotAllDaysUsed)
            .with_detail("used", used)
            .with_detail("allotment", allotment));
    }
    if used > allotment {
        return Err(AppError::new(ErrorCode::TooManyDaysUsed)
            .with_detail("used", used)
            .with_detail("allotment", allotment));
    }

    Ok(distinct.into_iter().collect())
}

/// Whether `today` falls inside the bulk-reset window
///
/// Plans are for the calendar year, so the bulk reset is only allowed
/// in January of the new year.
pub fn in_reset_window(today: NaiveDate) -> bool {
    today.month() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_exact_allotment_accepted() {
        let dates = vec![date(3, 10), date(3, 11), date(3, 12)];
        let accepted = validate_submission(&dates, 3).unwrap();
        assert_eq!(accepted.len(), 3);
    }

    #[test]
    fn test_empty_plan() {
        let err = validate_submission(&[], 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyPlan);
    }

    #[test]
    fn test_allotment_not_set() {
        let err = validate_submission(&[date(3, 10)], 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::AllotmentNotSet);
    }

    #[test]
    fn test_too_few_days() {
        let err = validate_submission(&[date(3, 10), date(3, 11)], 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAllDaysUsed);
    }

    #[test]
    fn test_too_many_days() {
        let dates = vec![date(3, 10), date(3, 11), date(3, 12), date(3, 13)];
        let err = validate_submission(&dates, 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::TooManyDaysUsed);
    }

    #[test]
    fn test_duplicates_count_once() {
        let dates = vec![date(3, 10), date(3, 10), date(3, 11), date(3, 12)];
        let accepted = validate_submission(&dates, 3).unwrap();
        assert_eq!(accepted, vec![date(3, 10), date(3, 11), date(3, 12)]);
    }

    #[test]
    fn test_reset_window() {
        assert!(in_reset_window(date(1, 15)));
        assert!(!in_reset_window(date(2, 1)));
        assert!(!in_reset_window(date(12, 31)));
    }
}
