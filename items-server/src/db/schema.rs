//! Schema creation for the items table

use sqlx::PgPool;

use super::DbError;

/// Create the items table and its name index if they do not exist.
pub async fn ensure(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
