//! Service layer orchestrating database writes with the audit trail.
//!
//! `HubService` wraps `HubDb` (raw database access) and the current
//! reviewer identity. Repo methods live in `impl HubService` blocks under
//! [`crate::repos`]; review operations live in [`crate::workflow`].

use hub_core::entities::{Asset, AuditEntry, Comment};
use hub_core::identity::{PLACEHOLDER_REVIEWER, ReviewerIdentity};

use crate::HubDb;
use crate::error::DatabaseError;
use crate::repos::asset::upsert_asset_on;
use crate::repos::audit::append_audit_on;
use crate::repos::comment::insert_comment_on;
use crate::retry::{RetryConfig, with_retry};

/// Rows written together in one transaction.
#[derive(Debug, Default)]
pub(crate) struct WriteBatch<'a> {
    pub assets: &'a [Asset],
    pub comment: Option<&'a Comment>,
    pub audits: Vec<AuditEntry>,
}

/// Adapter between the pure review workflow and the store.
///
/// Every mutation follows this protocol:
/// 1. Compute the new value with `hub-core`
/// 2. Begin transaction
/// 3. Write the row(s) and audit entries
/// 4. Commit, then hand the new value back
///
/// If any step fails the transaction rolls back and the caller keeps its
/// previous value. Without an identity, user-scoped operations do nothing.
pub struct HubService {
    db: HubDb,
    identity: Option<ReviewerIdentity>,
    seed_demo: bool,
}

impl HubService {
    /// Open a local store and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<ReviewerIdentity>,
        retry: RetryConfig,
    ) -> Result<Self, DatabaseError> {
        let db = HubDb::open_local_with(db_path, retry).await?;
        Ok(Self::from_db(db, identity))
    }

    /// Wrap an already-open database. Demo seeding is on.
    #[must_use]
    pub const fn from_db(db: HubDb, identity: Option<ReviewerIdentity>) -> Self {
        Self {
            db,
            identity,
            seed_demo: true,
        }
    }

    /// Same store, different identity.
    #[must_use]
    pub fn with_identity(self, identity: Option<ReviewerIdentity>) -> Self {
        Self { identity, ..self }
    }

    /// Toggle seeding of the demonstration set on first load.
    #[must_use]
    pub fn with_demo_seed(mut self, enabled: bool) -> Self {
        self.seed_demo = enabled;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HubDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&ReviewerIdentity> {
        self.identity.as_ref()
    }

    /// The signed-in user's id, `None` when signed out.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.user_id.as_str())
    }

    /// Name stamped on lenses this user starts reviewing.
    #[must_use]
    pub fn reviewer_name(&self) -> &str {
        self.identity
            .as_ref()
            .map_or(PLACEHOLDER_REVIEWER, ReviewerIdentity::reviewer_name)
    }

    #[must_use]
    pub const fn seeds_demo_assets(&self) -> bool {
        self.seed_demo
    }

    /// Write a batch atomically, retrying the whole transaction on lock contention.
    pub(crate) async fn persist(
        &self,
        user_id: &str,
        batch: &WriteBatch<'_>,
    ) -> Result<(), DatabaseError> {
        let conn = self.db.conn();
        with_retry(self.db.retry_config(), move || {
            write_batch(conn, user_id, batch)
        })
        .await
    }
}

async fn write_batch(
    conn: &libsql::Connection,
    user_id: &str,
    batch: &WriteBatch<'_>,
) -> Result<(), DatabaseError> {
    let tx = conn.transaction().await?;
    for asset in batch.assets {
        upsert_asset_on(&tx, user_id, asset).await?;
    }
    if let Some(comment) = batch.comment {
        insert_comment_on(&tx, user_id, comment).await?;
    }
    for entry in &batch.audits {
        append_audit_on(&tx, entry).await?;
    }
    tx.commit().await?;
    Ok(())
}
