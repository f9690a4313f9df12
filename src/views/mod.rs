//! Calendar view computation.
//!
//! Pure date-grid math lives in `grid`; `state` owns the reference date
//! and granularity and drives rendering; `time_indicator` positions the
//! "now" line for time-bearing views.

pub mod grid;
pub mod state;
pub mod time_indicator;
