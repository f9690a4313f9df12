use rusqlite::Row;

use crate::models::settings::Settings;

/// Maps a settings row to the model. Column order follows the SELECT in
/// the service.
pub fn row_to_settings(row: &Row) -> Result<Settings, rusqlite::Error> {
    Ok(Settings {
        id: Some(row.get(0)?),
        theme: row.get(1)?,
        first_day_of_week: row.get::<_, i64>(2)? as u8,
        time_format: row.get(3)?,
        date_format: row.get(4)?,
        current_view: row.get(5)?,
        show_week_numbers: row.get::<_, i32>(6)? != 0,
        notifications_enabled: row.get::<_, i32>(7)? != 0,
        default_event_duration: row.get(8)?,
        default_reminder_lead_minutes: row.get(9)?,
    })
}
