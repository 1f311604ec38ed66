mod add;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssetCommands;
use crate::context::AppContext;

/// Handle `crh asset`.
pub async fn handle(
    action: &AssetCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssetCommands::List(args) => list::run(args, ctx, flags).await,
        AssetCommands::Get { id } => get::run(id, ctx, flags).await,
        AssetCommands::Add(args) => add::run(args, ctx, flags).await,
    }
}
