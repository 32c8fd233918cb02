//! Per-request unit of work
//!
//! `run` wraps one request's storage work in a transaction:
//! begin, run the work, commit on `Ok`, roll back on `Err`.
//! The connection goes back to the pool on every exit path, including
//! cancellation, because an uncommitted sqlx transaction rolls back on drop.

use std::fmt::Display;

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

/// Run `work` inside a transaction.
///
/// The error returned by `work` is passed through unchanged after rollback.
/// A failing rollback is logged but never replaces that error.
///
/// # Example
///
/// ```ignore
/// let item = unit_of_work::run(&pool, |conn| {
///     Box::pin(async move { ItemRepo::new(conn).get(id).await })
/// })
/// .await?;
/// ```
pub async fn run<T, E, F>(pool: &PgPool, work: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<sqlx::Error> + Display,
{
    tracing::debug!("Opening database transaction");
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tracing::debug!("Committing transaction");
            tx.commit().await?;
            tracing::debug!("Transaction committed");
            Ok(value)
        }
        Err(err) => {
            tracing::error!(error = %err, "Transaction failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
