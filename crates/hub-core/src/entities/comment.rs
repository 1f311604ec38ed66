use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A free-form remark attached to an asset. Append-only; never edited or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    /// Back reference to the asset. Comments do not own their asset.
    pub asset_id: String,
    pub text: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
