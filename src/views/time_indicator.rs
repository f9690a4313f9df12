//! Current-time indicator positioning for time-bearing views.
//!
//! The display layer measures `pixels_per_hour`; this module turns "now"
//! into a vertical offset within the visible time range, and gates how
//! often that computation is repeated.

use chrono::{DateTime, Local};

/// Seconds between indicator refreshes while a time-bearing view is shown.
pub const REFRESH_INTERVAL_SECS: i64 = 60;

/// Vertical offset in pixels for the "now" line, or `None` when `now`
/// falls outside the displayed range.
///
/// Offset is fractional hours since the range start (hour + minute/60,
/// seconds ignored) times `pixels_per_hour`.
pub fn indicator_offset(
    now: DateTime<Local>,
    range_start: DateTime<Local>,
    range_end: DateTime<Local>,
    pixels_per_hour: f32,
) -> Option<f32> {
    if now < range_start || now > range_end {
        return None;
    }

    let hours_since_start = (now - range_start).num_minutes() as f32 / 60.0;
    Some(hours_since_start * pixels_per_hour)
}

/// Recurring refresh gate for the indicator.
///
/// Active only while a week or day view is shown. `stop` is idempotent
/// and leaves no pending work behind.
#[derive(Debug, Default)]
pub struct TimeIndicatorTicker {
    active: bool,
    last_refresh: Option<DateTime<Local>>,
}

impl TimeIndicatorTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the ticker. The first `should_refresh` after activation
    /// always reports true so the indicator appears immediately.
    pub fn start(&mut self) {
        self.active = true;
        self.last_refresh = None;
    }

    /// Deactivate the ticker and drop any pending refresh state.
    pub fn stop(&mut self) {
        self.active = false;
        self.last_refresh = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the indicator should be recomputed at `now`. Records the
    /// refresh instant when it answers true.
    pub fn should_refresh(&mut self, now: DateTime<Local>) -> bool {
        if !self.active {
            return false;
        }

        let due = match self.last_refresh {
            None => true,
            Some(last) => (now - last).num_seconds() >= REFRESH_INTERVAL_SECS,
        };

        if due {
            self.last_refresh = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 5, hour, min, 0).unwrap()
    }

    #[test]
    fn test_offset_none_before_range() {
        assert_eq!(indicator_offset(at(7, 59), at(8, 0), at(18, 0), 40.0), None);
    }

    #[test]
    fn test_offset_none_after_range() {
        assert_eq!(indicator_offset(at(18, 1), at(8, 0), at(18, 0), 40.0), None);
    }

    #[test]
    fn test_offset_at_range_start_is_zero() {
        assert_eq!(
            indicator_offset(at(8, 0), at(8, 0), at(18, 0), 40.0),
            Some(0.0)
        );
    }

    #[test]
    fn test_offset_includes_fractional_minutes() {
        // 2 hours 30 minutes past the start at 40 px/h = 100 px
        assert_eq!(
            indicator_offset(at(10, 30), at(8, 0), at(18, 0), 40.0),
            Some(100.0)
        );
    }

    #[test]
    fn test_offset_bounded_by_range_extent() {
        let px_per_hour = 40.0;
        let max = 10.0 * px_per_hour;

        for minutes in (0..=600).step_by(7) {
            let now = at(8, 0) + Duration::minutes(minutes);
            let offset = indicator_offset(now, at(8, 0), at(18, 0), px_per_hour).unwrap();
            assert!(offset >= 0.0);
            assert!(offset <= max);
        }
    }

    #[test]
    fn test_ticker_inactive_by_default() {
        let mut ticker = TimeIndicatorTicker::new();
        assert!(!ticker.is_active());
        assert!(!ticker.should_refresh(at(9, 0)));
    }

    #[test]
    fn test_ticker_refreshes_immediately_after_start() {
        let mut ticker = TimeIndicatorTicker::new();
        ticker.start();
        assert!(ticker.should_refresh(at(9, 0)));
    }

    #[test]
    fn test_ticker_waits_a_full_minute_between_refreshes() {
        let mut ticker = TimeIndicatorTicker::new();
        ticker.start();

        assert!(ticker.should_refresh(at(9, 0)));
        assert!(!ticker.should_refresh(at(9, 0) + Duration::seconds(30)));
        assert!(ticker.should_refresh(at(9, 1)));
    }

    #[test]
    fn test_ticker_stop_is_idempotent() {
        let mut ticker = TimeIndicatorTicker::new();
        ticker.start();
        ticker.stop();
        ticker.stop();

        assert!(!ticker.is_active());
        assert!(!ticker.should_refresh(at(9, 5)));
    }
}
