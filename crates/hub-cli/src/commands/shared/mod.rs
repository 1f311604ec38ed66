pub mod asset;
pub mod limit;
pub mod parse;
