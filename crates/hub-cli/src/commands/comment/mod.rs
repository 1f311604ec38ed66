use anyhow::Context;
use hub_core::entities::Comment;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::commands::shared::asset::require_asset;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CommentListResponse {
    asset_id: String,
    comments: Vec<Comment>,
}

/// Handle `crh comment`.
pub async fn handle(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    match action {
        CommentCommands::Add { asset_id, text } => {
            let comment = ctx
                .service
                .add_comment(asset_id, text)
                .await?
                .context("comment text is empty")?;
            output(&comment, flags.format)
        }
        CommentCommands::List { asset_id } => {
            require_asset(ctx, asset_id).await?;
            let comments = ctx.service.list_comments(asset_id).await?;
            output(
                &CommentListResponse {
                    asset_id: asset_id.clone(),
                    comments,
                },
                flags.format,
            )
        }
    }
}
