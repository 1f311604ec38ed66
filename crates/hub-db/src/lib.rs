//! # hub-db
//!
//! libSQL storage for the Content Review Hub.
//!
//! Holds one row per asset, scoped by user id, with the three lens reviews
//! embedded as JSON documents. Comments and an append-only audit trail live
//! alongside. [`service::HubService`] is the adapter the application talks
//! to: it runs `hub-core` workflow operations and persists their results.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
mod test_support;
pub mod workflow;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;
use retry::{RetryConfig, with_retry};

/// Central database handle.
///
/// Wraps a libSQL database and a single connection. Provides ID generation
/// and retrying statement helpers used by every repo.
pub struct HubDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    retry: RetryConfig,
}

impl HubDb {
    /// Open a local database at the given path (`:memory:` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with(path, RetryConfig::default()).await
    }

    /// [`Self::open_local`] with an explicit retry policy.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open_local_with(path: &str, retry: RetryConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Per-connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hub_db = Self { db, conn, retry };
        hub_db.run_migrations().await?;
        tracing::debug!(path, "opened review store");
        Ok(hub_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"ast-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Execute a statement, retrying transient lock errors.
    ///
    /// `params` is a factory because libSQL consumes parameters on each call.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` from the final attempt.
    pub async fn execute_with<P, F>(&self, sql: &str, params: F) -> Result<u64, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
    {
        let conn = &self.conn;
        let params = &params;
        with_retry(&self.retry, move || async move {
            Ok(conn.execute(sql, params()).await?)
        })
        .await
    }

    /// Run a query, retrying transient lock errors.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` from the final attempt.
    pub async fn query_with<P, F>(&self, sql: &str, params: F) -> Result<libsql::Rows, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
    {
        let conn = &self.conn;
        let params = &params;
        with_retry(&self.retry, move || async move {
            Ok(conn.query(sql, params()).await?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> HubDb {
        HubDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["assets", "comments", "audit_trail"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("ast").await.unwrap();
        assert!(id.starts_with("ast-"), "ID should start with 'ast-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in hub_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn check_constraints_reject_unknown_status() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO audit_trail (id, user_id, asset_id, action) VALUES ('aud-1', 'u', 'ast-1', 'deleted')",
                (),
            )
            .await;
        assert!(result.is_err(), "unknown audit action should be rejected");
    }

    #[tokio::test]
    async fn comment_requires_existing_asset() {
        let db = test_db().await;
        let result = db
            .execute_with(
                "INSERT INTO comments (id, user_id, asset_id, text, created_by) VALUES ('cmt-1', 'u', 'ast-missing', 'hi', 'u')",
                || (),
            )
            .await;
        assert!(result.is_err(), "foreign key should reject orphan comment");
    }

    #[tokio::test]
    async fn file_backed_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.db");
        let path = path.to_str().unwrap();

        {
            let db = HubDb::open_local(path).await.unwrap();
            db.execute_with(
                "INSERT INTO audit_trail (id, user_id, asset_id, action) VALUES ('aud-1', 'u', 'ast-1', 'created')",
                || (),
            )
            .await
            .unwrap();
        }

        let db = HubDb::open_local(path).await.unwrap();
        let mut rows = db
            .query_with("SELECT count(*) FROM audit_trail", || ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
