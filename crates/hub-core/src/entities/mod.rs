//! Entity structs for the Content Review Hub.
//!
//! Assets own their three lens reviews outright; comments and audit entries
//! refer back to an asset by id only. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod asset;
mod audit;
mod comment;
mod lens_review;

pub use asset::{Asset, NewAsset};
pub use audit::AuditEntry;
pub use comment::Comment;
pub use lens_review::{ChecklistResponse, LensReview};
