//! Review lenses, status enums, and asset classifications.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` returning the same string used in SQL storage.
//! Lens statuses deliberately carry no transition table: reviewers may move a
//! lens from any status to any other.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Lens
// ---------------------------------------------------------------------------

/// One of the three independent review dimensions applied to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Lens {
    LegalCompliance,
    BrandEthics,
    UxSafety,
}

impl Lens {
    /// All lenses in catalog order.
    pub const ALL: [Self; 3] = [Self::LegalCompliance, Self::BrandEthics, Self::UxSafety];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LegalCompliance => "legal_compliance",
            Self::BrandEthics => "brand_ethics",
            Self::UxSafety => "ux_safety",
        }
    }

    /// Human-readable lens name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LegalCompliance => "Legal & Compliance",
            Self::BrandEthics => "Brand & Ethics",
            Self::UxSafety => "UX/Safety",
        }
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LensStatus
// ---------------------------------------------------------------------------

/// Status of a single lens review.
///
/// ```text
/// not_started ⇄ in_review ⇄ changes_requested ⇄ approved
/// ```
///
/// Every status is reachable from every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LensStatus {
    NotStarted,
    InReview,
    ChangesRequested,
    Approved,
}

impl LensStatus {
    pub const ALL: [Self; 4] = [
        Self::NotStarted,
        Self::InReview,
        Self::ChangesRequested,
        Self::Approved,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InReview => "in_review",
            Self::ChangesRequested => "changes_requested",
            Self::Approved => "approved",
        }
    }

    /// Whether a reviewer is actively working this lens (`in_review` or
    /// `changes_requested`).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::InReview | Self::ChangesRequested)
    }
}

impl fmt::Display for LensStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Overall workflow status of an asset.
///
/// Derived from the three lens statuses and the risk level; see
/// [`crate::derive::derive_asset_status`]. `archived` is only ever written by
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Draft,
    InReview,
    Approved,
    Blocked,
    Archived,
}

impl AssetStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::InReview,
        Self::Approved,
        Self::Blocked,
        Self::Archived,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Blocked => "blocked",
            Self::Archived => "archived",
        }
    }

    /// Statuses preserved when every lens is reset to `not_started`.
    #[must_use]
    pub const fn is_sticky(self) -> bool {
        matches!(self, Self::Approved | Self::Blocked)
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetType
// ---------------------------------------------------------------------------

/// Kind of creative asset under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    TiktokScript,
    IgStatic,
    DeckSlide,
    LandingPage,
    Email,
    Other,
}

impl AssetType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TiktokScript => "tiktok_script",
            Self::IgStatic => "ig_static",
            Self::DeckSlide => "deck_slide",
            Self::LandingPage => "landing_page",
            Self::Email => "email",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// Publication channel for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Tiktok,
    Instagram,
    Site,
    Deck,
    Email,
    PaidAds,
    Other,
}

impl Channel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Instagram => "instagram",
            Self::Site => "site",
            Self::Deck => "deck",
            Self::Email => "email",
            Self::PaidAds => "paid_ads",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk classification. `high` turns any `changes_requested` lens into a hard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Seeded,
    LensUpdated,
    StatusChanged,
    Commented,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Seeded => "seeded",
            Self::LensUpdated => "lens_updated",
            Self::StatusChanged => "status_changed",
            Self::Commented => "commented",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
