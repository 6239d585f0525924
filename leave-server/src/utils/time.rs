//! Date helpers
//!
//! All attendance logic works on calendar days; client payloads carry
//! plain dates and deserialize straight to [`NaiveDate`].

use chrono::{Local, NaiveDate};

/// Today's date in the server's local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
