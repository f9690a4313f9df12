//! Reminder scheduling for upcoming events.
//!
//! Tick-driven: the host loop supplies `now` on every call, so tests
//! fast-forward time by passing synthetic instants instead of sleeping.
//! Pending reminders are owned here, keyed by event id, and removed when
//! they fire, are cancelled, or their event is deleted.

use std::collections::HashMap;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

use crate::models::event::Event;
use crate::models::reminder::ReminderLeadTime;

#[derive(Debug, Clone)]
struct PendingReminder {
    lead: ReminderLeadTime,
    fire_at: DateTime<Local>,
    event_title: String,
}

/// A reminder whose fire time has arrived. Handed to the notification
/// layer by the host loop.
#[derive(Debug, Clone, PartialEq)]
pub struct DueReminder {
    pub event_id: i64,
    pub event_title: String,
    pub lead_label: String,
    pub fire_at: DateTime<Local>,
}

/// Schedules and fires event reminders.
pub struct ReminderScheduler {
    pending: HashMap<i64, Vec<PendingReminder>>,
    enabled: bool,
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            enabled: true,
        }
    }

    /// Register reminders for an event. Lead times whose fire instant
    /// has already passed are skipped silently. Re-scheduling an event
    /// replaces its previous reminders.
    ///
    /// Returns the number of reminders registered.
    pub fn schedule(
        &mut self,
        event: &Event,
        leads: &[ReminderLeadTime],
        now: DateTime<Local>,
    ) -> usize {
        let Some(event_id) = event.id else {
            log::warn!("Cannot schedule reminders for unsaved event '{}'", event.title);
            return 0;
        };

        let reminders: Vec<PendingReminder> = leads
            .iter()
            .filter_map(|lead| {
                let fire_at = lead.fire_at(event.start);
                if fire_at <= now {
                    log::debug!(
                        "Skipping past reminder for event {} ({} before start)",
                        event_id,
                        lead.label()
                    );
                    return None;
                }

                Some(PendingReminder {
                    lead: *lead,
                    fire_at,
                    event_title: event.title.clone(),
                })
            })
            .collect();

        let registered = reminders.len();
        if reminders.is_empty() {
            self.pending.remove(&event_id);
        } else {
            self.pending.insert(event_id, reminders);
        }

        registered
    }

    /// Cancel all pending reminders for an event. Idempotent; unknown
    /// ids are a no-op. Returns the number of reminders removed.
    pub fn cancel(&mut self, event_id: i64) -> usize {
        self.pending
            .remove(&event_id)
            .map(|reminders| reminders.len())
            .unwrap_or(0)
    }

    /// Cancel every pending reminder.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Globally enable or disable firing. While disabled, due reminders
    /// are discarded unfired; callers never need to re-check state.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of reminders still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.values().map(|v| v.len()).sum()
    }

    /// Pop reminders whose fire time has arrived, in fire-time order.
    /// A disabled scheduler discards them instead of returning them.
    pub fn tick(&mut self, now: DateTime<Local>) -> Vec<DueReminder> {
        let mut due: Vec<DueReminder> = Vec::new();

        for (event_id, reminders) in self.pending.iter_mut() {
            let mut still_pending = Vec::with_capacity(reminders.len());
            for reminder in reminders.drain(..) {
                if reminder.fire_at <= now {
                    due.push(DueReminder {
                        event_id: *event_id,
                        event_title: reminder.event_title.clone(),
                        lead_label: reminder.lead.label(),
                        fire_at: reminder.fire_at,
                    });
                } else {
                    still_pending.push(reminder);
                }
            }
            *reminders = still_pending;
        }

        self.pending.retain(|_, reminders| !reminders.is_empty());

        if !self.enabled {
            if !due.is_empty() {
                log::debug!("Reminder firing disabled; discarding {} due reminders", due.len());
            }
            return Vec::new();
        }

        due.sort_by_key(|r| r.fire_at);
        due
    }

    /// How long until the next reminder is due, as a sleep hint for the
    /// driving loop. `None` when nothing is pending.
    pub fn next_due_in(&self, now: DateTime<Local>) -> Option<StdDuration> {
        let next_fire_at = self
            .pending
            .values()
            .flatten()
            .map(|reminder| reminder.fire_at)
            .min()?;

        let delta = next_fire_at - now;
        if delta <= Duration::zero() {
            Some(StdDuration::from_secs(0))
        } else {
            Some(delta.to_std().unwrap_or_else(|_| StdDuration::from_secs(0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
    }

    fn event_starting_at(id: i64, title: &str, start: DateTime<Local>) -> Event {
        let mut event = Event::new(title, start, start + Duration::hours(1)).unwrap();
        event.id = Some(id);
        event
    }

    fn lead(minutes: i64) -> ReminderLeadTime {
        ReminderLeadTime::from_minutes(minutes)
    }

    #[test]
    fn test_schedule_registers_future_reminders() {
        let now = at(2025, 3, 10, 9, 0);
        let event = event_starting_at(1, "Standup", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        let registered = scheduler.schedule(&event, &[lead(15), lead(30)], now);

        assert_eq!(registered, 2);
        assert_eq!(scheduler.pending_count(), 2);
    }

    #[test]
    fn test_schedule_skips_past_fire_times() {
        // Event start in 2020 with a 15-minute lead, scheduled "now" in
        // 2025: nothing registers, and nothing ever fires.
        let now = at(2025, 3, 10, 9, 0);
        let event = event_starting_at(1, "Ancient", at(2020, 1, 1, 0, 0));

        let mut scheduler = ReminderScheduler::new();
        let registered = scheduler.schedule(&event, &[lead(15)], now);

        assert_eq!(registered, 0);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.tick(at(2030, 1, 1, 0, 0)).is_empty());
    }

    #[test]
    fn test_schedule_mixes_past_and_future_leads() {
        let now = at(2025, 3, 10, 9, 50);
        let event = event_starting_at(1, "Review", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        // 15-minute lead is already past (9:45); 5-minute lead (9:55) is not.
        let registered = scheduler.schedule(&event, &[lead(15), lead(5)], now);

        assert_eq!(registered, 1);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_schedule_unsaved_event_is_refused() {
        let now = at(2025, 3, 10, 9, 0);
        let event = Event::new(
            "Draft",
            at(2025, 3, 10, 10, 0),
            at(2025, 3, 10, 11, 0),
        )
        .unwrap();

        let mut scheduler = ReminderScheduler::new();
        assert_eq!(scheduler.schedule(&event, &[lead(15)], now), 0);
    }

    #[test]
    fn test_tick_fires_due_reminders_in_order() {
        let now = at(2025, 3, 10, 9, 0);
        let event = event_starting_at(7, "Planning", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        scheduler.schedule(&event, &[lead(15), lead(30)], now);

        // Nothing due yet.
        assert!(scheduler.tick(at(2025, 3, 10, 9, 29)).is_empty());

        let due = scheduler.tick(at(2025, 3, 10, 9, 46));
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].lead_label, "30 min");
        assert_eq!(due[1].lead_label, "15 min");
        assert_eq!(due[0].event_id, 7);
        assert_eq!(due[0].event_title, "Planning");

        // Fired reminders are gone.
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.tick(at(2025, 3, 10, 11, 0)).is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let now = at(2025, 3, 10, 9, 0);
        let event = event_starting_at(1, "Standup", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        scheduler.schedule(&event, &[lead(15)], now);

        assert_eq!(scheduler.cancel(1), 1);
        assert!(scheduler.tick(at(2025, 3, 10, 10, 0)).is_empty());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut scheduler = ReminderScheduler::new();
        assert_eq!(scheduler.cancel(42), 0);
        assert_eq!(scheduler.cancel(42), 0);
    }

    #[test]
    fn test_cancel_all() {
        let now = at(2025, 3, 10, 9, 0);
        let mut scheduler = ReminderScheduler::new();
        scheduler.schedule(
            &event_starting_at(1, "A", at(2025, 3, 10, 10, 0)),
            &[lead(15)],
            now,
        );
        scheduler.schedule(
            &event_starting_at(2, "B", at(2025, 3, 10, 11, 0)),
            &[lead(15), lead(30)],
            now,
        );

        scheduler.cancel_all();
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.tick(at(2025, 3, 10, 12, 0)).is_empty());
    }

    #[test]
    fn test_disabled_scheduler_discards_due_reminders() {
        let now = at(2025, 3, 10, 9, 0);
        let event = event_starting_at(1, "Standup", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        scheduler.schedule(&event, &[lead(15)], now);
        scheduler.set_enabled(false);

        assert!(scheduler.tick(at(2025, 3, 10, 10, 0)).is_empty());

        // The due reminder was discarded, not deferred: re-enabling does
        // not fire it late.
        scheduler.set_enabled(true);
        assert!(scheduler.tick(at(2025, 3, 10, 10, 5)).is_empty());
    }

    #[test]
    fn test_reschedule_replaces_previous_reminders() {
        let now = at(2025, 3, 10, 8, 0);
        let event = event_starting_at(1, "Standup", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        scheduler.schedule(&event, &[lead(15), lead(30), lead(60)], now);
        assert_eq!(scheduler.pending_count(), 3);

        // Event moved; only one lead now.
        let moved = event_starting_at(1, "Standup", at(2025, 3, 10, 14, 0));
        scheduler.schedule(&moved, &[lead(15)], now);
        assert_eq!(scheduler.pending_count(), 1);

        let due = scheduler.tick(at(2025, 3, 10, 13, 45));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].fire_at, at(2025, 3, 10, 13, 45));
    }

    #[test]
    fn test_next_due_in() {
        let now = at(2025, 3, 10, 9, 0);
        let event = event_starting_at(1, "Standup", at(2025, 3, 10, 10, 0));

        let mut scheduler = ReminderScheduler::new();
        assert_eq!(scheduler.next_due_in(now), None);

        scheduler.schedule(&event, &[lead(15)], now);
        assert_eq!(
            scheduler.next_due_in(now),
            Some(StdDuration::from_secs(45 * 60))
        );

        // Past-due pending reminders report zero wait.
        assert_eq!(
            scheduler.next_due_in(at(2025, 3, 10, 9, 50)),
            Some(StdDuration::from_secs(0))
        );
    }
}
