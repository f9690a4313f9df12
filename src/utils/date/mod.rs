// Date utility functions

use chrono::{DateTime, Local};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

pub fn end_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(23, 59, 59)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    #[test]
    fn test_is_same_day() {
        let morning = Local.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let evening = Local.with_ymd_and_hms(2025, 3, 1, 22, 30, 0).unwrap();
        assert!(is_same_day(morning, evening));
        assert!(!is_same_day(morning, evening + Duration::hours(2)));
    }

    #[test]
    fn test_start_and_end_of_day() {
        let noon = Local.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let start = start_of_day(noon);
        let end = end_of_day(noon);

        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(end.hour(), 23);
        assert_eq!(end.minute(), 59);
        assert!(is_same_day(start, end));
    }
}
