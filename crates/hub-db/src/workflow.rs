//! Review operations against the store.
//!
//! Each method runs the matching `hub_core::workflow` function on the
//! caller's asset, persists the result together with its audit entries, and
//! only then returns the new asset. On a store failure the error is logged
//! and returned; the caller's asset was never touched, so the mutation
//! simply did not happen.

use chrono::{DateTime, Utc};
use hub_core::audit_detail::{CommentedDetail, LensChange, LensUpdatedDetail, StatusChangedDetail};
use hub_core::entities::{Asset, AuditEntry, Comment, NewAsset};
use hub_core::enums::{AuditAction, Lens, LensStatus};
use hub_core::errors::CoreError;
use hub_core::ids::{PREFIX_ASSET, PREFIX_AUDIT};
use hub_core::seed::{DEMO_ASSET_COUNT, demo_assets};
use hub_core::workflow::{
    CommentDraft, set_checklist_response, set_lens_status, set_overall_notes, status_change,
};

use crate::error::DatabaseError;
use crate::service::{HubService, WriteBatch};

impl HubService {
    /// Load the current user's assets, seeding the demonstration set first
    /// if the user has none and seeding is enabled.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if listing or seeding fails.
    pub async fn load_assets(&self) -> Result<Vec<Asset>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!("load_assets: no identity, returning nothing");
            return Ok(Vec::new());
        };

        let assets = self.list_assets_for_user().await?;
        if !assets.is_empty() || !self.seeds_demo_assets() {
            return Ok(assets);
        }

        let mut ids = Vec::with_capacity(DEMO_ASSET_COUNT);
        for _ in 0..DEMO_ASSET_COUNT {
            ids.push(self.db().generate_id(PREFIX_ASSET).await?);
        }
        let ids: [String; DEMO_ASSET_COUNT] = ids
            .try_into()
            .map_err(|_| DatabaseError::InvalidState("demo id count mismatch".into()))?;

        let now = Utc::now();
        let seeded = demo_assets(ids, user_id, now);
        let mut audits = Vec::with_capacity(seeded.len());
        for asset in &seeded {
            audits.push(self.audit(user_id, &asset.id, AuditAction::Seeded, None, now).await?);
        }

        let batch = WriteBatch {
            assets: &seeded,
            comment: None,
            audits,
        };
        if let Err(e) = self.persist(user_id, &batch).await {
            tracing::warn!(error = %e, "failed to persist demo assets");
            return Err(e);
        }

        tracing::info!(count = seeded.len(), user_id, "seeded demo assets");
        Ok(seeded)
    }

    /// Create a `draft` asset authored by the current user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for a blank title, or a store error.
    pub async fn create_asset(&self, input: NewAsset) -> Result<Option<Asset>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!("create_asset: no identity");
            return Ok(None);
        };

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ASSET).await?;
        let asset = Asset::new_at(id, input, user_id, now)?;

        let audits = vec![
            self.audit(user_id, &asset.id, AuditAction::Created, None, now)
                .await?,
        ];
        let batch = WriteBatch {
            assets: std::slice::from_ref(&asset),
            comment: None,
            audits,
        };
        if let Err(e) = self.persist(user_id, &batch).await {
            tracing::warn!(error = %e, "failed to persist new asset");
            return Err(e);
        }

        tracing::debug!(asset_id = %asset.id, "created asset");
        Ok(Some(asset))
    }

    /// Set a lens's status and re-derive the asset status.
    ///
    /// The lens's reviewer is stamped with the current reviewer name if it
    /// has none yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if persisting fails.
    pub async fn update_lens_status(
        &self,
        asset: &Asset,
        lens: Lens,
        status: LensStatus,
    ) -> Result<Option<Asset>, DatabaseError> {
        let next = set_lens_status(asset, lens, status, self.reviewer_name());
        self.commit_lens_change(asset, next, lens, LensChange::Status { status })
            .await
    }

    /// Record a pass/fail answer (and optional note) on a checklist item.
    ///
    /// An item id outside the lens's checklist leaves the asset unchanged
    /// and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if persisting fails.
    pub async fn record_checklist_response(
        &self,
        asset: &Asset,
        lens: Lens,
        item_id: &str,
        passed: bool,
        notes: Option<&str>,
    ) -> Result<Option<Asset>, DatabaseError> {
        let next = set_checklist_response(asset, lens, item_id, passed, notes);
        if next == *asset {
            tracing::debug!(asset_id = %asset.id, %lens, item_id, "checklist item not in lens, skipping");
            return Ok(self.user_id().map(|_| next));
        }
        let change = LensChange::Checklist {
            item_id: item_id.to_string(),
            passed,
        };
        self.commit_lens_change(asset, next, lens, change).await
    }

    /// Replace a lens's overall notes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if persisting fails.
    pub async fn update_overall_notes(
        &self,
        asset: &Asset,
        lens: Lens,
        notes: &str,
    ) -> Result<Option<Asset>, DatabaseError> {
        let next = set_overall_notes(asset, lens, notes);
        self.commit_lens_change(asset, next, lens, LensChange::Notes)
            .await
    }

    /// Append a comment to an asset.
    ///
    /// Empty or whitespace-only text is ignored (`Ok(None)`), as is a
    /// signed-out caller.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` with `CoreError::NotFound` if the
    /// current user has no such asset, or a store error.
    pub async fn add_comment(
        &self,
        asset_id: &str,
        text: &str,
    ) -> Result<Option<Comment>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!(asset_id, "add_comment: no identity");
            return Ok(None);
        };
        let Some(draft) = CommentDraft::new(asset_id, text) else {
            tracing::debug!(asset_id, "add_comment: empty text ignored");
            return Ok(None);
        };
        if self.get_asset(asset_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity_type: "asset".into(),
                id: asset_id.to_string(),
            }
            .into());
        }

        let now = Utc::now();
        let comment = self.comment_from_draft(user_id, draft, now).await?;
        let detail = to_json_value(&CommentedDetail {
            comment_id: comment.id.clone(),
        })?;
        let audits = vec![
            self.audit(user_id, asset_id, AuditAction::Commented, Some(detail), now)
                .await?,
        ];

        let batch = WriteBatch {
            assets: &[],
            comment: Some(&comment),
            audits,
        };
        if let Err(e) = self.persist(user_id, &batch).await {
            tracing::warn!(asset_id, error = %e, "failed to persist comment");
            return Err(e);
        }
        Ok(Some(comment))
    }

    /// Persist a lens mutation with its audit entries, then return it.
    async fn commit_lens_change(
        &self,
        before: &Asset,
        after: Asset,
        lens: Lens,
        change: LensChange,
    ) -> Result<Option<Asset>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!(asset_id = %before.id, %lens, "lens update: no identity");
            return Ok(None);
        };

        let now = after.lens(lens).last_updated;
        let mut audits = Vec::with_capacity(2);
        let detail = to_json_value(&LensUpdatedDetail { lens, change })?;
        audits.push(
            self.audit(user_id, &after.id, AuditAction::LensUpdated, Some(detail), now)
                .await?,
        );
        if let Some(changed) = status_change(before, &after) {
            let detail = to_json_value(&StatusChangedDetail {
                from: changed.from,
                to: changed.to,
            })?;
            audits.push(
                self.audit(user_id, &after.id, AuditAction::StatusChanged, Some(detail), now)
                    .await?,
            );
        }

        let batch = WriteBatch {
            assets: std::slice::from_ref(&after),
            comment: None,
            audits,
        };
        if let Err(e) = self.persist(user_id, &batch).await {
            tracing::warn!(asset_id = %before.id, %lens, error = %e, "failed to persist lens update");
            return Err(e);
        }

        tracing::debug!(asset_id = %after.id, %lens, status = %after.status, "lens updated");
        Ok(Some(after))
    }

    async fn audit(
        &self,
        user_id: &str,
        asset_id: &str,
        action: AuditAction,
        detail: Option<serde_json::Value>,
        created_at: DateTime<Utc>,
    ) -> Result<AuditEntry, DatabaseError> {
        Ok(AuditEntry {
            id: self.db().generate_id(PREFIX_AUDIT).await?,
            user_id: user_id.to_string(),
            asset_id: asset_id.to_string(),
            action,
            detail,
            created_at,
        })
    }
}

fn to_json_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DatabaseError> {
    serde_json::to_value(value).map_err(|e| DatabaseError::Other(e.into()))
}
