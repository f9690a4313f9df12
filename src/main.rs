// SuperCalendrier
// Headless entry point: opens the store, restores the persisted view,
// prints the active grid and runs one reminder scheduling pass.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use directories::ProjectDirs;

use supercalendrier::models::reminder::ReminderLeadTime;
use supercalendrier::services::context::CalendarContext;
use supercalendrier::services::database::Database;
use supercalendrier::services::notification::NotificationUrgency;
use supercalendrier::services::reminder::ReminderScheduler;
use supercalendrier::utils::date::{end_of_day, start_of_day};
use supercalendrier::views::grid::day_names;
use supercalendrier::views::state::{RenderFrame, RenderSink, ViewListener, ViewState, ViewType};

/// Prints rendered frames to stdout.
struct ConsoleSink {
    first_day_of_week: u8,
}

impl RenderSink for ConsoleSink {
    fn render(&mut self, frame: &RenderFrame) {
        match frame {
            RenderFrame::Month { grid } => {
                let first = NaiveDate::from_ymd_opt(grid.year, grid.month, 1).unwrap();
                println!("{}", first.format("%B %Y"));
                print_day_header(self.first_day_of_week);
                for week in grid.cells.chunks(7) {
                    let line: String = week
                        .iter()
                        .map(|cell| {
                            if !cell.in_current_period {
                                "   .".to_string()
                            } else if cell.is_today {
                                format!(" [{:>2}]", cell.date.day())
                            } else {
                                format!("{:>4}", cell.date.day())
                            }
                        })
                        .collect();
                    println!("{}", line);
                }
            }
            RenderFrame::Week { cells } => {
                print_day_header(self.first_day_of_week);
                let line: String = cells
                    .iter()
                    .map(|cell| format!("{:>4}", cell.date.day()))
                    .collect();
                println!("{}", line);
            }
            RenderFrame::Day { date, is_today } => {
                let marker = if *is_today { " (today)" } else { "" };
                println!("{}{}", date.format("%A, %B %d, %Y"), marker);
            }
            RenderFrame::Year { year, months } => {
                println!("{}", year);
                for grid in months {
                    let first = NaiveDate::from_ymd_opt(grid.year, grid.month, 1).unwrap();
                    println!("  {:<10} {:>2} days", first.format("%B"), grid.in_period_count());
                }
            }
        }
    }
}

fn print_day_header(first_day_of_week: u8) {
    let header: String = day_names(first_day_of_week)
        .iter()
        .map(|name| format!("{:>4}", name))
        .collect();
    println!("{}", header);
}

/// Logs view/date changes; formatting user-facing text happens here,
/// outside the core.
struct LogListener;

impl ViewListener for LogListener {
    fn view_changed(&mut self, view: ViewType) {
        log::info!("View changed to {}", view.as_str());
    }

    fn date_changed(&mut self, date: NaiveDate) {
        log::info!("Reference date is now {}", date);
    }

    fn today_confirmed(&mut self, date: NaiveDate) {
        println!("Jumped to today: {}", date.format("%A, %B %d, %Y"));
    }
}

fn resolve_db_path() -> String {
    if let Some(proj_dirs) = ProjectDirs::from("org", "SuperCalendrier", "SuperCalendrier") {
        let data_dir = proj_dirs.data_dir();
        if std::fs::create_dir_all(data_dir).is_ok() {
            return data_dir
                .join("supercalendrier.db")
                .to_string_lossy()
                .to_string();
        }
    }

    "supercalendrier.db".to_string()
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting SuperCalendrier core");

    let db = Database::new(&resolve_db_path())?;
    db.initialize_schema()?;
    let mut context = CalendarContext::new(db);

    let settings = context.settings_service().get()?;
    context
        .notification_service_mut()
        .set_enabled(settings.notifications_enabled);

    let now = Local::now();
    let mut view_state = ViewState::from_settings(&settings, now.date_naive())?;
    view_state.attach_sink(Box::new(ConsoleSink {
        first_day_of_week: settings.first_day_of_week,
    }));
    view_state.attach_listener(Box::new(LogListener));
    view_state.render(now);

    let today_events = context
        .event_service()
        .find_by_date_range(start_of_day(now), end_of_day(now))?;
    log::info!("{} event(s) today", today_events.len());

    let mut scheduler = ReminderScheduler::new();
    let default_lead = ReminderLeadTime::from_minutes(settings.default_reminder_lead_minutes);
    for event in context.event_service().find_upcoming(now, 50)? {
        scheduler.schedule(&event, &[default_lead], now);
    }
    log::info!("{} reminder(s) pending", scheduler.pending_count());

    for due in scheduler.tick(Local::now()) {
        let message = format!("{} starts in {}", due.event_title, due.lead_label);
        context.notification_service().show_reminder(
            &due.event_title,
            &message,
            NotificationUrgency::Normal,
        )?;
    }

    if let Some(wait) = scheduler.next_due_in(Local::now()) {
        log::info!("Next reminder due in {:?}", wait);
    }

    Ok(())
}
