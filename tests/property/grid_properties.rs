// Property-based tests for date-grid computation and view navigation

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use proptest::prelude::*;

use supercalendrier::views::grid::{
    days_in_month, first_cell_offset, month_grid, week_grid, week_start, MONTH_GRID_CELLS,
};
use supercalendrier::views::state::{ViewState, ViewType};
use supercalendrier::views::time_indicator::indicator_offset;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1970..2100i32, 1..=12u32, 1..=31u32).prop_filter_map("invalid calendar date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

proptest! {
    /// Property: every month grid has exactly 42 cells, and the cells
    /// flagged in-period are exactly the calendar days of that month.
    #[test]
    fn prop_month_grid_shape(
        year in 1970..2100i32,
        month in 1..=12u32,
        first_day_of_week in 0..=1u8,
    ) {
        let today = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = month_grid(year, month, first_day_of_week, today);

        prop_assert_eq!(grid.cells.len(), MONTH_GRID_CELLS);
        prop_assert_eq!(grid.in_period_count() as u32, days_in_month(year, month));

        // In-period cells are contiguous and numbered 1..=len.
        let days: Vec<u32> = grid
            .cells
            .iter()
            .filter(|c| c.in_current_period)
            .map(|c| c.date.day())
            .collect();
        prop_assert_eq!(days, (1..=days_in_month(year, month)).collect::<Vec<_>>());
    }

    /// Property: the first-cell offset is always a valid column index,
    /// and the first of the month lands on it.
    #[test]
    fn prop_first_cell_offset_in_bounds(
        year in 1970..2100i32,
        month in 1..=12u32,
        first_day_of_week in 0..=1u8,
    ) {
        let offset = first_cell_offset(year, month, first_day_of_week);
        prop_assert!(offset <= 6);

        let today = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = month_grid(year, month, first_day_of_week, today);
        prop_assert_eq!(grid.cells[offset as usize].date, today);
        prop_assert!(grid.cells[offset as usize].in_current_period);
    }

    /// Property: a week grid starts at the most recent first-weekday on
    /// or before the date and covers 7 consecutive days including it.
    #[test]
    fn prop_week_grid_alignment(
        date in any_date(),
        first_day_of_week in 0..=1u8,
    ) {
        let cells = week_grid(date, first_day_of_week, date);

        prop_assert_eq!(cells.len(), 7);
        let start = cells[0].date;

        prop_assert_eq!(
            start.weekday().num_days_from_sunday(),
            first_day_of_week as u32
        );
        prop_assert!(start <= date);
        prop_assert!(date - start < Duration::days(7));

        for (i, cell) in cells.iter().enumerate() {
            prop_assert_eq!(cell.date, start + Duration::days(i as i64));
        }
    }

    /// Property: week_start is idempotent.
    #[test]
    fn prop_week_start_idempotent(
        date in any_date(),
        first_day_of_week in 0..=1u8,
    ) {
        let start = week_start(date, first_day_of_week);
        prop_assert_eq!(week_start(start, first_day_of_week), start);
    }

    /// Property: navigate(+1) then navigate(-1) restores the reference
    /// date for every granularity.
    #[test]
    fn prop_navigate_inverse_law(
        date in any_date(),
        view_index in 0..4usize,
        first_day_of_week in 0..=1u8,
    ) {
        let view = [ViewType::Year, ViewType::Month, ViewType::Week, ViewType::Day][view_index];
        let mut state = ViewState::new(view, date, first_day_of_week);
        let now = chrono::Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        state.navigate(1, now);
        state.navigate(-1, now);

        prop_assert_eq!(state.reference_date(), date);
    }

    /// Property: the indicator offset is absent outside the range and
    /// bounded by the range extent inside it.
    #[test]
    fn prop_indicator_offset_bounds(
        minutes_into_day in 0..=1440i64,
        range_start_hour in 0..=12u32,
        range_hours in 1..=12i64,
        pixels_per_hour in 1.0..200.0f32,
    ) {
        let day = chrono::Local.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();
        let now = day + Duration::minutes(minutes_into_day);
        let range_start = day + Duration::hours(range_start_hour as i64);
        let range_end = range_start + Duration::hours(range_hours);

        match indicator_offset(now, range_start, range_end, pixels_per_hour) {
            None => {
                prop_assert!(now < range_start || now > range_end);
            }
            Some(offset) => {
                prop_assert!(now >= range_start && now <= range_end);
                prop_assert!(offset >= 0.0);
                prop_assert!(offset <= range_hours as f32 * pixels_per_hour);
            }
        }
    }
}
