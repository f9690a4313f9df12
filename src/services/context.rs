//! Shared access point for services the host application needs.
//!
//! Components receive this context (or individual services) explicitly
//! instead of reaching into a shared global object.

use crate::services::backup::BackupService;
use crate::services::category::CategoryService;
use crate::services::database::Database;
use crate::services::event::EventService;
use crate::services::notification::NotificationService;
use crate::services::settings::SettingsService;

pub struct CalendarContext {
    database: Database,
    notification_service: NotificationService,
}

impl CalendarContext {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            notification_service: NotificationService::new(),
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn notification_service(&self) -> &NotificationService {
        &self.notification_service
    }

    pub fn notification_service_mut(&mut self) -> &mut NotificationService {
        &mut self.notification_service
    }

    pub fn settings_service(&self) -> SettingsService<'_> {
        SettingsService::new(&self.database)
    }

    pub fn event_service(&self) -> EventService<'_> {
        EventService::new(self.database.connection())
    }

    pub fn category_service(&self) -> CategoryService<'_> {
        CategoryService::new(self.database.connection())
    }

    pub fn backup_service(&self) -> BackupService<'_> {
        BackupService::new(&self.database)
    }
}
