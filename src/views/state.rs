//! View-state machine for the calendar.
//!
//! Owns the current reference date and granularity, navigates by view
//! unit, and drives rendering plus change notifications. The render
//! always completes before the deferred view-change notification can be
//! observed: the notification is queued with a settle delay and only
//! delivered by a later `tick`.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

use super::grid::{self, GridCell, MonthGrid};
use super::time_indicator::TimeIndicatorTicker;
use crate::error::CalendarError;
use crate::models::settings::Settings;

/// Delay between a view switch finishing its render and the view-change
/// notification being delivered, letting dependent overlays query the
/// settled view.
pub const NOTIFY_SETTLE_MS: i64 = 100;

/// Calendar view granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewType {
    Year,
    #[default]
    Month,
    Week,
    Day,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Year => "Year",
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
        }
    }

    /// Views that display a time axis and carry the "now" indicator.
    pub fn is_time_bearing(&self) -> bool {
        matches!(self, ViewType::Week | ViewType::Day)
    }
}

impl FromStr for ViewType {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Year" | "year" => Ok(ViewType::Year),
            "Month" | "month" => Ok(ViewType::Month),
            "Week" | "week" => Ok(ViewType::Week),
            "Day" | "day" => Ok(ViewType::Day),
            other => Err(CalendarError::InvalidGranularity(other.to_string())),
        }
    }
}

/// What a render hands to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrame {
    Year { year: i32, months: Vec<MonthGrid> },
    Month { grid: MonthGrid },
    Week { cells: Vec<GridCell> },
    Day { date: NaiveDate, is_today: bool },
}

impl RenderFrame {
    pub fn view(&self) -> ViewType {
        match self {
            RenderFrame::Year { .. } => ViewType::Year,
            RenderFrame::Month { .. } => ViewType::Month,
            RenderFrame::Week { .. } => ViewType::Week,
            RenderFrame::Day { .. } => ViewType::Day,
        }
    }
}

/// Receives freshly computed frames. Implemented by the display layer.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSink {
    fn render(&mut self, frame: &RenderFrame);
}

/// Receives view and date change notifications.
#[cfg_attr(test, mockall::automock)]
pub trait ViewListener {
    fn view_changed(&mut self, view: ViewType);
    fn date_changed(&mut self, date: NaiveDate);
    /// Transient confirmation hook for "jump to today". Formatting the
    /// user-facing message is the host's concern.
    fn today_confirmed(&mut self, date: NaiveDate);
}

#[derive(Debug, Clone, Copy)]
struct DeferredNotice {
    due: DateTime<Local>,
    view: ViewType,
}

/// State machine over `{Year, Month, Week, Day}` and a reference date.
///
/// Collaborators are injected; the state owns its reference date and
/// replaces it on every navigation (`NaiveDate` is `Copy`, so stale
/// aliases cannot exist).
pub struct ViewState {
    view: ViewType,
    reference: NaiveDate,
    /// Day-of-month the user last chose explicitly. Month and year
    /// steps clamp to short months but keep navigating from this value,
    /// so navigate(+1) then navigate(-1) restores the original date.
    anchor_day: u32,
    first_day_of_week: u8,
    sink: Option<Box<dyn RenderSink>>,
    listener: Option<Box<dyn ViewListener>>,
    deferred: Vec<DeferredNotice>,
    ticker: TimeIndicatorTicker,
}

impl ViewState {
    pub fn new(view: ViewType, reference: NaiveDate, first_day_of_week: u8) -> Self {
        let mut ticker = TimeIndicatorTicker::new();
        if view.is_time_bearing() {
            ticker.start();
        }

        Self {
            view,
            reference,
            anchor_day: reference.day(),
            first_day_of_week,
            sink: None,
            listener: None,
            deferred: Vec::new(),
            ticker,
        }
    }

    /// Restore view and first-weekday from persisted settings.
    pub fn from_settings(settings: &Settings, today: NaiveDate) -> Result<Self, CalendarError> {
        let view = settings.current_view.parse()?;
        Ok(Self::new(view, today, settings.first_day_of_week))
    }

    pub fn attach_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sink = Some(sink);
    }

    pub fn attach_listener(&mut self, listener: Box<dyn ViewListener>) {
        self.listener = Some(listener);
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    /// Change the first weekday preference and re-render the grid.
    pub fn set_first_day_of_week(&mut self, first_day_of_week: u8, now: DateTime<Local>) {
        self.first_day_of_week = first_day_of_week;
        self.render(now);
    }

    /// Switch granularity: render immediately, then queue the view-change
    /// notification for delivery `NOTIFY_SETTLE_MS` after `now`.
    pub fn set_view(&mut self, view: ViewType, now: DateTime<Local>) {
        self.view = view;

        if view.is_time_bearing() {
            self.ticker.start();
        } else {
            self.ticker.stop();
        }

        self.render(now);
        self.deferred.push(DeferredNotice {
            due: now + Duration::milliseconds(NOTIFY_SETTLE_MS),
            view,
        });
    }

    /// Switch granularity by persisted name. Unknown names leave the
    /// current state untouched.
    pub fn set_view_by_name(&mut self, name: &str, now: DateTime<Local>) -> Result<(), CalendarError> {
        let view = ViewType::from_str(name)?;
        self.set_view(view, now);
        Ok(())
    }

    /// Advance (+1) or retreat (-1) the reference date by one unit of
    /// the current granularity. Renders immediately and notifies the
    /// date change synchronously.
    pub fn navigate(&mut self, direction: i32, now: DateTime<Local>) {
        let next = match self.view {
            ViewType::Year => self.add_months(12 * direction),
            ViewType::Month => self.add_months(direction),
            ViewType::Week => self.reference + Duration::days(7 * direction as i64),
            ViewType::Day => self.reference + Duration::days(direction as i64),
        };

        if matches!(self.view, ViewType::Week | ViewType::Day) {
            self.anchor_day = next.day();
        }

        self.reference = next;
        self.render(now);

        if let Some(listener) = self.listener.as_mut() {
            listener.date_changed(next);
        }
    }

    /// Jump to a specific date (e.g. a clicked grid cell).
    pub fn set_reference_date(&mut self, date: NaiveDate, now: DateTime<Local>) {
        self.reference = date;
        self.anchor_day = date.day();
        self.render(now);

        if let Some(listener) = self.listener.as_mut() {
            listener.date_changed(date);
        }
    }

    /// Reset the reference date to today, render, notify, and signal the
    /// transient confirmation.
    pub fn go_to_today(&mut self, now: DateTime<Local>) {
        let today = now.date_naive();
        self.reference = today;
        self.anchor_day = today.day();
        self.render(now);

        if let Some(listener) = self.listener.as_mut() {
            listener.date_changed(today);
            listener.today_confirmed(today);
        }
    }

    /// Compute the current view's cells and hand them to the sink. With
    /// no sink attached the render is skipped and reported.
    pub fn render(&mut self, now: DateTime<Local>) {
        let frame = self.build_frame(now.date_naive());

        match self.sink.as_mut() {
            Some(sink) => sink.render(&frame),
            None => {
                log::warn!("{}", CalendarError::MissingRenderTarget("view render"));
            }
        }
    }

    /// Deliver deferred notifications that have come due.
    pub fn tick(&mut self, now: DateTime<Local>) {
        if self.deferred.is_empty() {
            return;
        }

        let (due, pending): (Vec<_>, Vec<_>) =
            self.deferred.drain(..).partition(|n| n.due <= now);
        self.deferred = pending;

        if let Some(listener) = self.listener.as_mut() {
            for notice in due {
                listener.view_changed(notice.view);
            }
        }
    }

    /// Whether the "now" indicator should be recomputed at `now`.
    pub fn should_refresh_indicator(&mut self, now: DateTime<Local>) -> bool {
        self.ticker.should_refresh(now)
    }

    pub fn indicator_active(&self) -> bool {
        self.ticker.is_active()
    }

    /// Inclusive date range shown by the current view.
    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        match self.view {
            ViewType::Year => (
                NaiveDate::from_ymd_opt(self.reference.year(), 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(self.reference.year(), 12, 31).unwrap(),
            ),
            ViewType::Month => {
                let first = self.reference.with_day(1).unwrap();
                let last = first
                    + Duration::days(
                        grid::days_in_month(first.year(), first.month()) as i64 - 1,
                    );
                (first, last)
            }
            ViewType::Week => {
                let start = grid::week_start(self.reference, self.first_day_of_week);
                (start, start + Duration::days(6))
            }
            ViewType::Day => (self.reference, self.reference),
        }
    }

    fn build_frame(&self, today: NaiveDate) -> RenderFrame {
        match self.view {
            ViewType::Year => RenderFrame::Year {
                year: self.reference.year(),
                months: grid::year_grid(self.reference.year(), self.first_day_of_week, today),
            },
            ViewType::Month => RenderFrame::Month {
                grid: grid::month_grid(
                    self.reference.year(),
                    self.reference.month(),
                    self.first_day_of_week,
                    today,
                ),
            },
            ViewType::Week => RenderFrame::Week {
                cells: grid::week_grid(self.reference, self.first_day_of_week, today),
            },
            ViewType::Day => RenderFrame::Day {
                date: self.reference,
                is_today: self.reference == today,
            },
        }
    }

    /// Month arithmetic anchored on `anchor_day`, clamped to the target
    /// month's length.
    fn add_months(&self, delta: i32) -> NaiveDate {
        let months = self.reference.year() * 12 + self.reference.month0() as i32 + delta;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as u32 + 1;
        let day = self.anchor_day.min(grid::days_in_month(year, month));

        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
