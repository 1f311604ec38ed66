//! Asset repository: user-scoped list, lookup, and upsert.
//!
//! Each asset is one row. Lens reviews (with their checklist responses) are
//! stored whole as JSON documents in `legal_review`, `brand_review`, and
//! `ux_review`; `tags` is a JSON array.

use std::collections::BTreeSet;

use hub_core::entities::{Asset, LensReview};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_json_column, to_json_text};
use crate::service::HubService;

const SELECT_COLS: &str = "id, title, asset_type, channel, link_or_path, description, created_by, \
     created_at, status, tags, risk_level, legal_review, brand_review, ux_review";

const UPSERT_SQL: &str = "INSERT INTO assets (user_id, id, title, asset_type, channel, link_or_path, description,
        created_by, created_at, status, tags, risk_level, legal_review, brand_review, ux_review, updated_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, datetime('now'))
     ON CONFLICT (user_id, id) DO UPDATE SET
        title = excluded.title,
        asset_type = excluded.asset_type,
        channel = excluded.channel,
        link_or_path = excluded.link_or_path,
        description = excluded.description,
        created_by = excluded.created_by,
        created_at = excluded.created_at,
        status = excluded.status,
        tags = excluded.tags,
        risk_level = excluded.risk_level,
        legal_review = excluded.legal_review,
        brand_review = excluded.brand_review,
        ux_review = excluded.ux_review,
        updated_at = excluded.updated_at";

fn row_to_asset(row: &libsql::Row) -> Result<Asset, DatabaseError> {
    let tags: BTreeSet<String> = parse_json_column(&row.get::<String>(9)?, "tags")?;
    let legal: LensReview = parse_json_column(&row.get::<String>(11)?, "legal_review")?;
    let brand: LensReview = parse_json_column(&row.get::<String>(12)?, "brand_review")?;
    let ux: LensReview = parse_json_column(&row.get::<String>(13)?, "ux_review")?;

    Ok(Asset {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        asset_type: parse_enum(&row.get::<String>(2)?)?,
        channel: parse_enum(&row.get::<String>(3)?)?,
        link_or_path: get_opt_string(row, 4)?,
        description: get_opt_string(row, 5)?,
        created_by: row.get::<String>(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        status: parse_enum(&row.get::<String>(8)?)?,
        tags,
        risk_level: parse_enum(&row.get::<String>(10)?)?,
        legal,
        brand,
        ux,
    })
}

/// Upsert on an explicit connection so callers can batch it into a transaction.
pub(crate) async fn upsert_asset_on(
    conn: &libsql::Connection,
    user_id: &str,
    asset: &Asset,
) -> Result<(), DatabaseError> {
    let tags = to_json_text(&asset.tags)?;
    let legal = to_json_text(&asset.legal)?;
    let brand = to_json_text(&asset.brand)?;
    let ux = to_json_text(&asset.ux)?;

    conn.execute(
        UPSERT_SQL,
        libsql::params![
            user_id,
            asset.id.as_str(),
            asset.title.as_str(),
            asset.asset_type.as_str(),
            asset.channel.as_str(),
            asset.link_or_path.as_deref(),
            asset.description.as_deref(),
            asset.created_by.as_str(),
            asset.created_at.to_rfc3339(),
            asset.status.as_str(),
            tags,
            asset.risk_level.as_str(),
            legal,
            brand,
            ux
        ],
    )
    .await?;
    Ok(())
}

impl HubService {
    /// All assets stored for the current user, newest first.
    ///
    /// Signed out: empty.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_assets_for_user(&self) -> Result<Vec<Asset>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!("list_assets_for_user: no identity, returning nothing");
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT {SELECT_COLS} FROM assets WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self.db().query_with(&sql, || [user_id]).await?;

        let mut assets = Vec::new();
        while let Some(row) = rows.next().await? {
            assets.push(row_to_asset(&row)?);
        }
        Ok(assets)
    }

    /// Look up one of the current user's assets.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn get_asset(&self, id: &str) -> Result<Option<Asset>, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!(asset_id = id, "get_asset: no identity");
            return Ok(None);
        };

        let sql = format!("SELECT {SELECT_COLS} FROM assets WHERE user_id = ?1 AND id = ?2");
        let mut rows = self.db().query_with(&sql, || [user_id, id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_asset(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert or fully replace an asset row for the current user.
    ///
    /// Returns `false` without writing when signed out. Last write wins:
    /// there is no version check.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails after retries.
    pub async fn upsert_asset(&self, asset: &Asset) -> Result<bool, DatabaseError> {
        let Some(user_id) = self.user_id() else {
            tracing::debug!(asset_id = %asset.id, "upsert_asset: no identity");
            return Ok(false);
        };

        let conn = self.db().conn();
        crate::retry::with_retry(self.db().retry_config(), move || {
            upsert_asset_on(conn, user_id, asset)
        })
        .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use hub_core::entities::NewAsset;
    use hub_core::enums::{AssetStatus, AssetType, Channel, Lens, LensStatus, RiskLevel};
    use hub_core::workflow::{set_checklist_response_at, set_lens_status_at, set_overall_notes_at};
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{test_service, test_service_as};

    use super::*;

    fn sample(id: &str, offset_minutes: i64) -> Asset {
        let now = Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap() + Duration::minutes(offset_minutes);
        Asset::new_at(
            id,
            NewAsset {
                title: format!("Asset {id}"),
                asset_type: AssetType::IgStatic,
                channel: Channel::Instagram,
                link_or_path: Some("figma://frame/12".into()),
                description: None,
                tags: vec!["summer".into(), "promo".into()],
                risk_level: RiskLevel::High,
            },
            "user_1",
            now,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn upsert_then_get_roundtrips_losslessly() {
        let svc = test_service().await;
        let base = sample("ast-00000001", 0);
        let t = base.created_at + Duration::seconds(90);
        let reviewed = set_lens_status_at(&base, Lens::LegalCompliance, LensStatus::ChangesRequested, "Priya", t);
        let reviewed = set_checklist_response_at(&reviewed, Lens::LegalCompliance, "legal-3", true, Some("ok"), t);
        let reviewed = set_overall_notes_at(&reviewed, Lens::UxSafety, "Add alt text", t);
        assert_eq!(reviewed.status, AssetStatus::Blocked);

        assert!(svc.upsert_asset(&reviewed).await.unwrap());
        let loaded = svc.get_asset("ast-00000001").await.unwrap().unwrap();
        assert_eq!(loaded, reviewed);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_row() {
        let svc = test_service().await;
        let a = sample("ast-00000001", 0);
        svc.upsert_asset(&a).await.unwrap();

        let b = set_lens_status_at(&a, Lens::BrandEthics, LensStatus::InReview, "Marco", a.created_at);
        svc.upsert_asset(&b).await.unwrap();

        let all = svc.list_assets_for_user().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, AssetStatus::InReview);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let svc = test_service().await;
        svc.upsert_asset(&sample("ast-00000001", 0)).await.unwrap();
        svc.upsert_asset(&sample("ast-00000002", 10)).await.unwrap();
        svc.upsert_asset(&sample("ast-00000003", 5)).await.unwrap();

        let ids: Vec<_> = svc
            .list_assets_for_user()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["ast-00000002", "ast-00000003", "ast-00000001"]);
    }

    #[tokio::test]
    async fn assets_are_scoped_by_user() {
        let alice = test_service_as("user_alice").await;
        alice.upsert_asset(&sample("ast-00000001", 0)).await.unwrap();

        let bob = alice.with_identity(Some(hub_core::identity::ReviewerIdentity::new(
            "user_bob", None,
        )));
        assert!(bob.list_assets_for_user().await.unwrap().is_empty());
        assert!(bob.get_asset("ast-00000001").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn signed_out_is_silent() {
        let svc = test_service().await.with_identity(None);
        assert!(!svc.upsert_asset(&sample("ast-00000001", 0)).await.unwrap());
        assert!(svc.list_assets_for_user().await.unwrap().is_empty());
        assert!(svc.get_asset("ast-00000001").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_lens_document_is_a_query_error() {
        let svc = test_service().await;
        svc.upsert_asset(&sample("ast-00000001", 0)).await.unwrap();
        svc.db()
            .conn()
            .execute("UPDATE assets SET ux_review = '{\"lens\":' WHERE id = 'ast-00000001'", ())
            .await
            .unwrap();

        let err = svc.get_asset("ast-00000001").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Query(ref msg) if msg.contains("ux_review")));
    }
}
