//! JSON snapshot backup of calendar data.
//!
//! Exports events and categories to a pretty-printed JSON file and
//! loads them back, e.g. for migrating between machines.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::event::Event;
use crate::services::category::CategoryService;
use crate::services::database::Database;
use crate::services::event::EventService;

/// Serialized form of the calendar's user data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarSnapshot {
    pub events: Vec<Event>,
    pub categories: Vec<Category>,
}

/// Service for exporting and importing calendar snapshots.
pub struct BackupService<'a> {
    db: &'a Database,
}

impl<'a> BackupService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Write every event and category to `path` as JSON. Returns the
    /// number of events exported.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let snapshot = CalendarSnapshot {
            events: EventService::new(self.db.connection()).list_all()?,
            categories: CategoryService::new(self.db.connection()).list_all()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;

        log::info!(
            "Exported {} events and {} categories to {}",
            snapshot.events.len(),
            snapshot.categories.len(),
            path.display()
        );
        Ok(snapshot.events.len())
    }

    /// Load a snapshot from `path` and insert its contents. Categories
    /// that already exist by name are skipped; events are always added.
    /// Returns the number of events imported.
    pub fn import_from(&self, path: &Path) -> Result<usize> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot from {}", path.display()))?;
        let snapshot: CalendarSnapshot = serde_json::from_str(&data)
            .with_context(|| format!("Failed to deserialize snapshot from {}", path.display()))?;

        let category_service = CategoryService::new(self.db.connection());
        for category in snapshot.categories {
            if category_service.get_by_name(&category.name)?.is_none() {
                let mut fresh = category;
                fresh.id = None;
                category_service.create(fresh)?;
            }
        }

        let event_service = EventService::new(self.db.connection());
        let mut imported = 0;
        for event in snapshot.events {
            let mut fresh = event;
            fresh.id = None;
            event_service.create(fresh)?;
            imported += 1;
        }

        log::info!("Imported {} events from {}", imported, path.display());
        Ok(imported)
    }
}
