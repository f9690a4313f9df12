// Settings module
// User preferences persisted in the single-row settings table

/// Application settings backed by the preferences store.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub id: Option<i64>,
    pub theme: String,
    /// 0 = Sunday, 1 = Monday
    pub first_day_of_week: u8,
    pub time_format: String,
    pub date_format: String,
    /// Name of the persisted view ("Year", "Month", "Week", "Day")
    pub current_view: String,
    pub show_week_numbers: bool,
    pub notifications_enabled: bool,
    /// Default event length in minutes for quick creation
    pub default_event_duration: i64,
    /// Default reminder lead time in minutes
    pub default_reminder_lead_minutes: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "light".to_string(),
            first_day_of_week: 0, // Sunday
            time_format: "12h".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            current_view: "Month".to_string(),
            show_week_numbers: false,
            notifications_enabled: true,
            default_event_duration: 60,
            default_reminder_lead_minutes: 15,
        }
    }
}

impl Settings {
    /// Validate settings before persisting.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 1 {
            return Err("First day of week must be 0 (Sunday) or 1 (Monday)".to_string());
        }

        if self.time_format != "12h" && self.time_format != "24h" {
            return Err(format!("Unknown time format: {}", self.time_format));
        }

        match self.current_view.as_str() {
            "Year" | "Month" | "Week" | "Day" => {}
            other => return Err(format!("Unknown view: {}", other)),
        }

        if self.default_event_duration <= 0 {
            return Err("Default event duration must be positive".to_string());
        }

        if self.default_reminder_lead_minutes < 0 {
            return Err("Default reminder lead time cannot be negative".to_string());
        }

        Ok(())
    }
}
