//! Pure date-grid computation shared by every calendar view.
//!
//! All functions are pure and idempotent: the caller supplies `today`
//! explicitly, so the same inputs always produce the same cells.

use chrono::{Datelike, Duration, NaiveDate};

/// A month view always spans six full weeks.
pub const MONTH_GRID_CELLS: usize = 42;

/// One cell of a rendered calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the period being displayed (the
    /// target month for month grids, always true for week grids).
    pub in_current_period: bool,
    pub is_today: bool,
}

/// A month's cells plus the month identity they were computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Number of cells flagged as belonging to the target month.
    pub fn in_period_count(&self) -> usize {
        self.cells.iter().filter(|c| c.in_current_period).count()
    }
}

/// Start of the week containing `date`.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(
        if month == 12 { year + 1 } else { year },
        if month == 12 { 1 } else { month + 1 },
        1,
    )
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    .num_days() as u32
}

/// Column offset of the first day of the month within its grid row.
///
/// Always in 0..=6; a month starting on Sunday lands at position 6 when
/// the week starts on Monday.
pub fn first_cell_offset(year: i32, month: u32, first_day_of_week: u8) -> u32 {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    ((first_of_month.weekday().num_days_from_sunday() as i64 - first_day_of_week as i64 + 7) % 7)
        as u32
}

/// Six-week grid for a month. Cell `i` holds the date
/// `first_of_month - offset + i` days; leading and trailing cells come
/// from the neighboring months and are flagged out-of-period.
pub fn month_grid(year: i32, month: u32, first_day_of_week: u8, today: NaiveDate) -> MonthGrid {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    let offset = first_cell_offset(year, month, first_day_of_week);
    let grid_start = first_of_month - Duration::days(offset as i64);

    let cells = (0..MONTH_GRID_CELLS as i64)
        .map(|i| {
            let date = grid_start + Duration::days(i);
            GridCell {
                date,
                in_current_period: date.year() == year && date.month() == month,
                is_today: date == today,
            }
        })
        .collect();

    MonthGrid { year, month, cells }
}

/// Seven consecutive cells starting at the most recent occurrence of
/// `first_day_of_week` on or before `date`.
pub fn week_grid(date: NaiveDate, first_day_of_week: u8, today: NaiveDate) -> Vec<GridCell> {
    let start = week_start(date, first_day_of_week);

    (0..7)
        .map(|i| {
            let date = start + Duration::days(i);
            GridCell {
                date,
                in_current_period: true,
                is_today: date == today,
            }
        })
        .collect()
}

/// All twelve month grids of a year.
pub fn year_grid(year: i32, first_day_of_week: u8, today: NaiveDate) -> Vec<MonthGrid> {
    (1..=12)
        .map(|month| month_grid(year, month, first_day_of_week, today))
        .collect()
}

/// Weekday header labels in display order.
pub fn day_names(first_day_of_week: u8) -> Vec<&'static str> {
    let all_days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = first_day_of_week as usize;
    let mut result = Vec::with_capacity(7);
    for i in 0..7 {
        result.push(all_days[(start + i) % 7]);
    }
    result
}
