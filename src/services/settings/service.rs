use anyhow::{anyhow, Context, Result};

use super::mapper::row_to_settings;
use crate::models::settings::Settings;
use crate::services::database::Database;

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let conn = self.db.connection();

        let settings = conn
            .query_row(
                "SELECT id, theme, first_day_of_week, time_format, date_format,
                        current_view, show_week_numbers, notifications_enabled,
                        default_event_duration, default_reminder_lead_minutes
                 FROM settings WHERE id = 1",
                [],
                |row| Ok(row_to_settings(row)?),
            )
            .context("Failed to load settings")?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        let conn = self.db.connection();

        conn.execute(
            "UPDATE settings \
             SET theme = ?1, \
                 first_day_of_week = ?2, \
                 time_format = ?3, \
                 date_format = ?4, \
                 current_view = ?5, \
                 show_week_numbers = ?6, \
                 notifications_enabled = ?7, \
                 default_event_duration = ?8, \
                 default_reminder_lead_minutes = ?9, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1",
            (
                &settings.theme,
                settings.first_day_of_week,
                &settings.time_format,
                &settings.date_format,
                &settings.current_view,
                settings.show_week_numbers as i32,
                settings.notifications_enabled as i32,
                settings.default_event_duration,
                settings.default_reminder_lead_minutes,
            ),
        )
        .context("Failed to update settings")?;

        Ok(())
    }

    /// Reset settings to defaults
    #[allow(dead_code)]
    pub fn reset(&self) -> Result<()> {
        let default_settings = Settings::default();
        self.update(&default_settings)
    }
}
