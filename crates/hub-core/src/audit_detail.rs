//! Typed audit detail payloads.
//!
//! Each audit action can carry a structured `detail` JSON blob. These types
//! give the common shapes a schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssetStatus, Lens, LensStatus};

/// Detail for `AuditAction::StatusChanged`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: AssetStatus,
    pub to: AssetStatus,
}

/// What a lens mutation touched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LensChange {
    Status { status: LensStatus },
    Checklist { item_id: String, passed: bool },
    Notes,
}

/// Detail for `AuditAction::LensUpdated`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LensUpdatedDetail {
    pub lens: Lens,
    pub change: LensChange,
}

/// Detail for `AuditAction::Commented`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommentedDetail {
    pub comment_id: String,
}
