use clap::{Args, Subcommand};

/// Asset commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssetCommands {
    /// List assets, most recently reviewed first.
    List(AssetListArgs),
    /// Get an asset with its comments.
    Get { id: String },
    /// Add a draft asset.
    Add(AssetAddArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct AssetListArgs {
    /// Case-insensitive match on title or tag
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub risk: Option<String>,
    #[arg(long)]
    pub channel: Option<String>,
    #[arg(long = "type")]
    pub asset_type: Option<String>,
    /// Only assets whose given lens is not yet approved
    #[arg(long)]
    pub lens_not_approved: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AssetAddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long = "type")]
    pub asset_type: String,
    #[arg(long)]
    pub channel: String,
    #[arg(long, default_value = "medium")]
    pub risk: String,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub tag: Vec<String>,
}
