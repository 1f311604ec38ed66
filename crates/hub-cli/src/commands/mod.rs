pub mod asset;
pub mod audit;
pub mod checklist;
pub mod comment;
pub mod dispatch;
pub mod lens;
pub mod shared;
