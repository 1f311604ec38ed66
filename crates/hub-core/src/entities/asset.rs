use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LensReview;
use crate::enums::{AssetStatus, AssetType, Channel, Lens, LensStatus, RiskLevel};
use crate::errors::CoreError;

/// A creative asset routed through the three review lenses.
///
/// `status` is derived from the lens statuses and `risk_level`
/// (see [`crate::derive::derive_asset_status`]). Workflow operations
/// recompute it after every lens mutation; nothing sets it directly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub title: String,
    pub asset_type: AssetType,
    pub channel: Channel,
    pub link_or_path: Option<String>,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub status: AssetStatus,
    pub tags: BTreeSet<String>,
    pub risk_level: RiskLevel,
    pub legal: LensReview,
    pub brand: LensReview,
    pub ux: LensReview,
}

/// Input for the "add asset" action.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAsset {
    pub title: String,
    pub asset_type: AssetType,
    pub channel: Channel,
    pub link_or_path: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub risk_level: RiskLevel,
}

impl Asset {
    /// Build a `draft` asset with all three lenses `not_started`.
    ///
    /// Tags are trimmed and empty tags dropped; blank optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is empty or whitespace.
    pub fn new_at(
        id: impl Into<String>,
        input: NewAsset,
        created_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("asset title must not be empty".into()));
        }

        Ok(Self {
            id: id.into(),
            title: title.to_string(),
            asset_type: input.asset_type,
            channel: input.channel,
            link_or_path: non_blank(input.link_or_path),
            description: non_blank(input.description),
            created_by: created_by.into(),
            created_at: now,
            status: AssetStatus::Draft,
            tags: input
                .tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect(),
            risk_level: input.risk_level,
            legal: LensReview::empty_at(Lens::LegalCompliance, now),
            brand: LensReview::empty_at(Lens::BrandEthics, now),
            ux: LensReview::empty_at(Lens::UxSafety, now),
        })
    }

    /// The review owned for `lens`.
    #[must_use]
    pub const fn lens(&self, lens: Lens) -> &LensReview {
        match lens {
            Lens::LegalCompliance => &self.legal,
            Lens::BrandEthics => &self.brand,
            Lens::UxSafety => &self.ux,
        }
    }

    pub fn lens_mut(&mut self, lens: Lens) -> &mut LensReview {
        match lens {
            Lens::LegalCompliance => &mut self.legal,
            Lens::BrandEthics => &mut self.brand,
            Lens::UxSafety => &mut self.ux,
        }
    }

    /// Lens statuses in catalog order: legal, brand, ux.
    #[must_use]
    pub const fn lens_statuses(&self) -> [LensStatus; 3] {
        [self.legal.status, self.brand.status, self.ux.status]
    }

    /// Most recent `last_updated` across the three lenses.
    #[must_use]
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.legal
            .last_updated
            .max(self.brand.last_updated)
            .max(self.ux.last_updated)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
