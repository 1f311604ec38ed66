//! Status derivation: the asset's overall status from its three lenses.
//!
//! Policy, in priority order (first match wins):
//! 1. ANY lens `changes_requested` AND risk `high` → `blocked`
//! 2. ALL lenses `approved` → `approved`
//! 3. ANY lens `in_review` or `changes_requested` → `in_review`
//! 4. Otherwise (all `not_started`) → keep `approved`/`blocked` if the asset
//!    already holds one, else `draft`
//!
//! Risk only gates rule 1: on low and medium risk assets a `changes_requested`
//! lens falls through to `in_review`. Checklist responses are not an input.
//!
//! Derivation is total and pure: every combination of three lens statuses,
//! a risk level, and a current status yields exactly one `AssetStatus`.

use crate::entities::Asset;
use crate::enums::{AssetStatus, LensStatus, RiskLevel};

/// Compute the status `asset` should hold given its lenses and risk level.
#[must_use]
pub fn derive_asset_status(asset: &Asset) -> AssetStatus {
    derive_status(asset.status, asset.lens_statuses(), asset.risk_level)
}

/// Derivation over raw inputs. `current` only matters for rule 4.
#[must_use]
pub fn derive_status(
    current: AssetStatus,
    lenses: [LensStatus; 3],
    risk_level: RiskLevel,
) -> AssetStatus {
    let any_changes_requested = lenses.contains(&LensStatus::ChangesRequested);

    if any_changes_requested && risk_level == RiskLevel::High {
        return AssetStatus::Blocked;
    }
    if lenses.iter().all(|s| *s == LensStatus::Approved) {
        return AssetStatus::Approved;
    }
    if lenses.iter().any(|s| s.is_active()) {
        return AssetStatus::InReview;
    }

    // Some lenses approved, the rest not started, also lands here.
    if current.is_sticky() {
        current
    } else {
        AssetStatus::Draft
    }
}
