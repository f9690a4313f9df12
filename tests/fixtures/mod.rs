// Test fixtures - reusable test data
// Provides consistent dates across integration tests

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns March 1, 2025 (a Saturday)
    pub fn march_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    /// Returns March 10, 2025 (a Monday) at 09:00 local time
    pub fn march_10_2025_morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    /// Returns Dec 31, 2025 at 23:59 (New Year's Eve)
    pub fn new_years_eve_2025() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap()
    }
}

/// Event helpers shared by integration tests
pub mod events {
    use chrono::{DateTime, Duration, Local};
    use supercalendrier::models::event::Event;

    /// A one-hour meeting starting at the given instant
    pub fn meeting_at(title: &str, start: DateTime<Local>) -> Event {
        Event::new(title, start, start + Duration::hours(1)).unwrap()
    }
}
