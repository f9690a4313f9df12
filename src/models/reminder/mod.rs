//! Reminder lead-time model.
//!
//! A lead time is the distance ahead of an event's start at which a
//! reminder should fire. Labels are stable strings handed to the
//! notification layer ("15 min", "1 h", "1 day").

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// How far ahead of an event's start a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderLeadTime {
    minutes: i64,
}

impl ReminderLeadTime {
    /// Create a lead time from whole minutes. Negative values are
    /// clamped to zero (a reminder at the event start itself).
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes: minutes.max(0),
        }
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.minutes)
    }

    /// The absolute instant this lead time fires for an event starting
    /// at `start`.
    pub fn fire_at(&self, start: DateTime<Local>) -> DateTime<Local> {
        start - self.duration()
    }

    /// Human-readable label for notification text ("15 min", "1 h",
    /// "1 day", "2 days", "1 h 30 min").
    pub fn label(&self) -> String {
        const MINUTES_PER_HOUR: i64 = 60;
        const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

        if self.minutes == 0 {
            return "now".to_string();
        }

        if self.minutes % MINUTES_PER_DAY == 0 {
            let days = self.minutes / MINUTES_PER_DAY;
            return if days == 1 {
                "1 day".to_string()
            } else {
                format!("{} days", days)
            };
        }

        if self.minutes >= MINUTES_PER_HOUR {
            let hours = self.minutes / MINUTES_PER_HOUR;
            let rest = self.minutes % MINUTES_PER_HOUR;
            return if rest == 0 {
                format!("{} h", hours)
            } else {
                format!("{} h {} min", hours, rest)
            };
        }

        format!("{} min", self.minutes)
    }

    /// Standard lead-time choices offered by the UI layer.
    pub fn presets() -> Vec<ReminderLeadTime> {
        [5, 15, 30, 60, 24 * 60]
            .iter()
            .map(|m| ReminderLeadTime::from_minutes(*m))
            .collect()
    }
}
