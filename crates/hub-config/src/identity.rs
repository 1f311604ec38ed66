//! Signed-in reviewer identity.

use hub_core::identity::ReviewerIdentity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Opaque user id that scopes every stored record.
    #[serde(default)]
    pub user_id: String,

    /// Name stamped on lenses this user reviews.
    #[serde(default)]
    pub display_name: String,
}

impl IdentityConfig {
    /// A user id is present (and not just whitespace).
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    /// The identity to hand the store, or `None` when signed out.
    #[must_use]
    pub fn reviewer(&self) -> Option<ReviewerIdentity> {
        if !self.is_configured() {
            return None;
        }
        let display_name = Some(self.display_name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from);
        Some(ReviewerIdentity::new(self.user_id.trim(), display_name))
    }
}
