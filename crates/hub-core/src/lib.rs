//! # hub-core
//!
//! Domain model and review rules for the Content Review Hub.
//!
//! Everything here is pure and synchronous:
//! - Entity structs for assets, lens reviews, comments, and audit entries
//! - Lens, status, and metadata enums
//! - The fixed per-lens checklist catalog
//! - Status derivation from lens statuses and risk level
//! - Functional workflow updates that re-derive status
//! - In-memory asset filtering and ordering
//! - The demonstration asset set used to seed an empty store
//! - Reviewer identity, ID prefixes, and validation errors

pub mod audit_detail;
pub mod catalog;
pub mod derive;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod identity;
pub mod ids;
pub mod seed;
pub mod workflow;
