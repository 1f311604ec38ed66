//! ID prefixes. IDs are `{prefix}-{8 hex chars}`, generated by the store.

pub const PREFIX_ASSET: &str = "ast";
pub const PREFIX_COMMENT: &str = "cmt";
pub const PREFIX_AUDIT: &str = "aud";

pub const ALL_PREFIXES: [&str; 3] = [PREFIX_ASSET, PREFIX_COMMENT, PREFIX_AUDIT];
