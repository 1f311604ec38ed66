use hub_core::entities::{Asset, Comment};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::asset::require_asset;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AssetDetailResponse {
    asset: Asset,
    comments: Vec<Comment>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let asset = require_asset(ctx, id).await?;
    let comments = ctx.service.list_comments(id).await?;
    output(&AssetDetailResponse { asset, comments }, flags.format)
}
