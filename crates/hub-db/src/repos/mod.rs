//! Repository modules for assets, comments, and the audit trail.
//!
//! Each module adds methods to `HubService` via `impl HubService` blocks.
//! Reads and standalone writes are scoped to the current identity's user id.

pub mod asset;
pub mod audit;
pub mod comment;
