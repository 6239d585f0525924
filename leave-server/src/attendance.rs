//! Attendance status calculations
//!
//! Pure calendar-day logic over sick-leave periods and approved leave.
//! Everything here compares dates only; callers truncate timestamps
//! before passing them in.

use chrono::NaiveDate;

use crate::db::models::{Leave, SickLeave};

/// Whether `day` falls inside a sick-leave period
///
/// A period covers `[start_date, end_date)`: the end day is the day the
/// user returned to work, so it no longer counts as sick. An ongoing
/// period covers every day from its start.
pub fn is_sick(day: NaiveDate, period: &SickLeave) -> bool {
    if day < period.start_date {
        return false;
    }
    match period.end_date {
        Some(end) => day < end,
        None => true,
    }
}

/// Whether `day` falls inside any of the given periods
pub fn is_sick_any(day: NaiveDate, periods: &[SickLeave]) -> bool {
    periods.iter().any(|p| is_sick(day, p))
}

/// Whether `day` is covered by any approved leave
pub fn is_on_leave(day: NaiveDate, leaves: &[Leave]) -> bool {
    leaves.iter().any(|l| l.covers(day))
}

/// Total sick days across closed periods
///
/// Each closed period counts both its first and last calendar day, so a
/// period from Monday to Saturday of the same week is six days.
/// Ongoing periods are excluded: their length is not yet known.
pub fn cumulative_sick_days(periods: &[SickLeave]) -> i64 {
    periods
        .iter()
        .filter_map(|p| {
            let end = p.end_date?;
            let days = (end - p.start_date).num_days() + 1;
            (days > 0).then_some(days)
        })
        .sum()
}
