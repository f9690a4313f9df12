//! Category model for organizing events.
//!
//! Categories group events by type (Work, Personal, etc.) with an
//! associated color and optional icon for visual identification.

use serde::{Deserialize, Serialize};

/// A category for organizing events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (database primary key)
    pub id: Option<i64>,
    /// Display name of the category (must be unique)
    pub name: String,
    /// Hex color code for the category (e.g., "#3B82F6")
    pub color: String,
    /// Optional emoji or icon for the category
    pub icon: Option<String>,
    /// Whether this is a system/default category (cannot be deleted)
    pub is_system: bool,
}

impl Category {
    /// Create a new category with the given name and color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
            icon: None,
            is_system: false,
        }
    }

    /// Create a system category (cannot be deleted by user).
    pub fn system(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            is_system: true,
            ..Self::new(name, color)
        }
    }

    /// Validate the category fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name cannot be empty".to_string());
        }

        if !self.color.starts_with('#') || (self.color.len() != 7 && self.color.len() != 4) {
            return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }

    /// Default category set seeded on first launch.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::system("Work", "#3B82F6"),
            Category::system("Personal", "#10B981"),
            Category::system("Family", "#F59E0B"),
            Category::system("Health", "#EF4444"),
        ]
    }
}
