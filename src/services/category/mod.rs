//! Category service for CRUD operations on event categories.

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection};

use crate::models::category::Category;

/// Service for managing event categories.
pub struct CategoryService<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService with the given database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create a new category.
    pub fn create(&self, category: Category) -> Result<Category> {
        category.validate().map_err(|e| anyhow!("{}", e))?;

        self.conn
            .execute(
                "INSERT INTO categories (name, color, icon, is_system)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    category.name.trim(),
                    category.color,
                    category.icon,
                    category.is_system as i32,
                ],
            )
            .context("Failed to insert category")?;

        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)
    }

    /// Get a category by ID.
    pub fn get_by_id(&self, id: i64) -> Result<Category> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name, color, icon, is_system FROM categories WHERE id = ?1",
                params![id],
                map_category_row,
            )
            .context("Category not found")?;

        Ok(category)
    }

    /// Get a category by name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        let result = self.conn.query_row(
            "SELECT id, name, color, icon, is_system FROM categories WHERE name = ?1",
            params![name],
            map_category_row,
        );

        match result {
            Ok(cat) => Ok(Some(cat)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all categories ordered by name.
    pub fn list_all(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, icon, is_system FROM categories ORDER BY name ASC")?;

        let categories = stmt
            .query_map([], map_category_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(categories)
    }

    /// Delete a category. System categories cannot be deleted.
    pub fn delete(&self, id: i64) -> Result<()> {
        let category = self.get_by_id(id)?;
        if category.is_system {
            return Err(anyhow!("Cannot delete system category '{}'", category.name));
        }

        self.conn
            .execute("DELETE FROM categories WHERE id = ?1", params![id])
            .context("Failed to delete category")?;

        Ok(())
    }
}

fn map_category_row(row: &rusqlite::Row<'_>) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        color: row.get(2)?,
        icon: row.get(3)?,
        is_system: row.get::<_, i32>(4)? != 0,
    })
}
