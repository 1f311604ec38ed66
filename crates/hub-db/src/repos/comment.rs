//! Comment repository: row mapping, inserts inside a write batch, per-asset listing.

use chrono::{DateTime, Utc};
use hub_core::entities::Comment;
use hub_core::ids::PREFIX_COMMENT;
use hub_core::workflow::CommentDraft;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::HubService;

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: row.get::<String>(0)?,
        asset_id: row.get::<String>(1)?,
        text: row.get::<String>(2)?,
        created_by: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// Insert on an explicit connection so callers can batch it into a transaction.
pub(crate) async fn insert_comment_on(
    conn: &libsql::Connection,
    user_id: &str,
    comment: &Comment,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO comments (id, user_id, asset_id, text, created_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        libsql::params![
            comment.id.as_str(),
            user_id,
            comment.asset_id.as_str(),
            comment.text.as_str(),
            comment.created_by.as_str(),
            comment.created_at.to_rfc3339()
        ],
    )
    .await?;
    Ok(())
}

impl HubService {
    /// Turn a validated draft into a comment authored by `user_id`.
    ///
    /// Only assigns the id; storing it is up to the caller's write batch.
    pub(crate) async fn comment_from_draft(
        &self,
        user_id: &str,
        draft: CommentDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Comment, DatabaseError> {
        Ok(Comment {
            id: self.db().generate_id(PREFIX_COMMENT).await?,
            asset_id: draft.asset_id,
            text: draft.text,
            created_by: user_id.to_string(),
            created_at,
        })
    }

    /// Comments on one of the current user's assets, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_comments(&self, asset_id: &str) -> Result<Vec<Comment>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!(asset_id, "list_comments: no identity");
            return Ok(Vec::new());
        };

        let mut rows = self
            .db()
            .query_with(
                "SELECT id, asset_id, text, created_by, created_at
                 FROM comments WHERE user_id = ?1 AND asset_id = ?2
                 ORDER BY created_at ASC, rowid ASC",
                || [user_id, asset_id],
            )
            .await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(row_to_comment(&row)?);
        }
        Ok(comments)
    }
}
