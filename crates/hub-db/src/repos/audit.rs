//! Audit trail repository.
//!
//! Append-only entries recording every persisted mutation, scoped by user.

use hub_core::entities::AuditEntry;
use hub_core::enums::AuditAction;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_json};
use crate::service::HubService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub asset_id: Option<String>,
    pub action: Option<AuditAction>,
    pub limit: Option<u32>,
}

/// Append on an explicit connection so callers can batch it into a transaction.
pub(crate) async fn append_audit_on(
    conn: &libsql::Connection,
    entry: &AuditEntry,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO audit_trail (id, user_id, asset_id, action, detail, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        libsql::params![
            entry.id.as_str(),
            entry.user_id.as_str(),
            entry.asset_id.as_str(),
            entry.action.as_str(),
            entry.detail.as_ref().map(std::string::ToString::to_string),
            entry.created_at.to_rfc3339()
        ],
    )
    .await?;
    Ok(())
}

impl HubService {
    /// Append a standalone audit entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_audit(&self, entry: &AuditEntry) -> Result<(), DatabaseError> {
        let conn = self.db().conn();
        crate::retry::with_retry(self.db().retry_config(), move || {
            append_audit_on(conn, entry)
        })
        .await
    }

    /// Query the current user's audit entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(
        &self,
        filter: &AuditFilter,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!("query_audit: no identity, returning nothing");
            return Ok(Vec::new());
        };

        let mut params: Vec<libsql::Value> = vec![libsql::Value::Text(user_id.to_string())];
        let mut conditions = vec!["user_id = ?1".to_string()];

        if let Some(ref asset_id) = filter.asset_id {
            params.push(libsql::Value::Text(asset_id.clone()));
            conditions.push(format!("asset_id = ?{}", params.len()));
        }
        if let Some(action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, user_id, asset_id, action, detail, created_at
             FROM audit_trail WHERE {}
             ORDER BY created_at DESC, rowid DESC LIMIT {limit}",
            conditions.join(" AND ")
        );

        let mut rows = self
            .db()
            .query_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await? {
            entries.push(AuditEntry {
                id: row.get::<String>(0)?,
                user_id: row.get::<String>(1)?,
                asset_id: row.get::<String>(2)?,
                action: parse_enum(&row.get::<String>(3)?)?,
                detail: parse_optional_json(get_opt_string(&row, 4)?.as_deref())?,
                created_at: parse_datetime(&row.get::<String>(5)?)?,
            });
        }

        Ok(entries)
    }
}
