//! In-memory filtering over an asset collection.
//!
//! All set predicates must hold (AND). Unset predicates match everything.

use std::cmp::Reverse;

use crate::entities::Asset;
use crate::enums::{AssetStatus, AssetType, Channel, Lens, LensStatus, RiskLevel};

/// Filter criteria for asset list views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    /// Case-insensitive substring matched against title and tags.
    pub search: Option<String>,
    pub status: Option<AssetStatus>,
    pub risk_level: Option<RiskLevel>,
    pub channel: Option<Channel>,
    pub asset_type: Option<AssetType>,
    /// Keep only assets whose named lens is not yet `approved`.
    pub lens_not_approved: Option<Lens>,
}

impl AssetFilter {
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(query) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            let hit = asset.title.to_lowercase().contains(&needle)
                || asset
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if self.status.is_some_and(|s| asset.status != s) {
            return false;
        }
        if self.risk_level.is_some_and(|r| asset.risk_level != r) {
            return false;
        }
        if self.channel.is_some_and(|c| asset.channel != c) {
            return false;
        }
        if self.asset_type.is_some_and(|t| asset.asset_type != t) {
            return false;
        }
        if let Some(lens) = self.lens_not_approved
            && asset.lens(lens).status == LensStatus::Approved
        {
            return false;
        }
        true
    }

    /// Matching assets, in input order.
    #[must_use]
    pub fn apply<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        assets.iter().filter(|asset| self.matches(asset)).collect()
    }
}

/// Sort most recently reviewed first (latest lens update across the three lenses).
pub fn sort_by_recent_activity(assets: &mut [Asset]) {
    assets.sort_by_key(|asset| Reverse(asset.last_activity()));
}
