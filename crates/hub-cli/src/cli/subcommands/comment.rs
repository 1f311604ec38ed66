use clap::Subcommand;

/// Comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// Add a comment to an asset.
    Add { asset_id: String, text: String },
    /// List an asset's comments, oldest first.
    List { asset_id: String },
}
