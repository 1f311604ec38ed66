mod asset;
mod comment;
mod lens;

pub use asset::{AssetAddArgs, AssetCommands, AssetListArgs};
pub use comment::CommentCommands;
pub use lens::LensCommands;
