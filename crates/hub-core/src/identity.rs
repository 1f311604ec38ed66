use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reviewer name stamped on a lens when the identity carries no display name.
pub const PLACEHOLDER_REVIEWER: &str = "Current User";

/// Opaque identity of the current user, supplied by the surrounding application.
///
/// Scopes storage queries (`user_id`) and stamps `created_by`, reviewer names,
/// and comment authorship.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewerIdentity {
    pub user_id: String,
    pub display_name: Option<String>,
}

impl ReviewerIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name,
        }
    }

    /// Name to stamp on a lens the first time this user touches it.
    #[must_use]
    pub fn reviewer_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(PLACEHOLDER_REVIEWER)
    }
}
