//! Item repository
//!
//! Works on the connection of an open unit of work, never on the pool, so
//! every call takes part in the caller's transaction.
//! - list: whole table ordered by id (filtering belongs to the handler)
//! - get/update/delete: absence is a `None`/`false` return, not an error
//! - update: only supplied fields are written

use sqlx::{FromRow, PgConnection};

use crate::models::{ItemChanges, NewItem};

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Item repository
pub struct ItemRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ItemRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// All items, ascending by id.
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        tracing::debug!("SELECT id, name, description FROM items ORDER BY id");

        let items: Vec<Item> = sqlx::query_as(
            "SELECT id, name, description FROM items ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        tracing::debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    /// A single item, or `None` if the id is unknown.
    pub async fn get(&mut self, id: i64) -> Result<Option<Item>, DbError> {
        tracing::debug!(item_id = id, "SELECT item by id");

        let item: Option<Item> = sqlx::query_as(
            "SELECT id, name, description FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        match &item {
            Some(found) => tracing::debug!(item_id = id, name = %found.name, "Item found"),
            None => tracing::warn!(item_id = id, "Item not found"),
        }

        Ok(item)
    }

    /// Insert an item and return it with its generated id.
    pub async fn create(&mut self, item: &NewItem) -> Result<Item, DbError> {
        tracing::debug!(name = item.name.as_str(), "INSERT item");

        let created: Item = sqlx::query_as(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.description.as_ref().map(|d| d.as_str()))
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::info!(item_id = created.id, "Item created");
        Ok(created)
    }

    /// Apply `changes` to an existing item.
    ///
    /// Only supplied columns are written; the others keep whatever value the
    /// row holds when the UPDATE runs. Returns `None` without writing anything
    /// if the id is unknown. An empty change set returns the current row.
    pub async fn update(&mut self, id: i64, changes: &ItemChanges) -> Result<Option<Item>, DbError> {
        if changes.is_empty() {
            tracing::debug!(item_id = id, "No fields supplied, nothing to update");
            return self.get(id).await;
        }

        let name = changes.name.as_ref().map(|n| n.as_str());
        let description = changes
            .description
            .as_ref()
            .map(|value| value.as_ref().map(|d| d.as_str()));

        tracing::debug!(item_id = id, fields = ?changes.fields(), "UPDATE item");

        let updated: Option<Item> = sqlx::query_as(
            r#"
            UPDATE items
            SET name = CASE WHEN $2 THEN $3 ELSE name END,
                description = CASE WHEN $4 THEN $5 ELSE description END
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(name.is_some())
        .bind(name)
        .bind(description.is_some())
        .bind(description.flatten())
        .fetch_optional(&mut *self.conn)
        .await?;

        let Some(updated) = updated else {
            tracing::warn!(item_id = id, "Item to update not found");
            return Ok(None);
        };

        tracing::info!(item_id = id, "Item updated");
        Ok(Some(updated))
    }

    /// Remove an item. Returns `false` if it did not exist.
    pub async fn delete(&mut self, id: i64) -> Result<bool, DbError> {
        tracing::debug!(item_id = id, "DELETE item");

        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(item_id = id, "Item deleted");
        } else {
            tracing::warn!(item_id = id, "Item to delete not found");
        }

        Ok(deleted)
    }
}
