mod check;
mod notes;
mod status;

use hub_core::entities::Asset;
use hub_core::enums::{AssetStatus, Lens};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LensCommands;
use crate::context::AppContext;

/// Handle `crh lens`.
pub async fn handle(
    action: &LensCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LensCommands::Status {
            asset_id,
            lens,
            status,
        } => status::run(asset_id, lens, status, ctx, flags).await,
        LensCommands::Check {
            asset_id,
            lens,
            item_id,
            fail,
            notes,
        } => check::run(asset_id, lens, item_id, !*fail, notes.as_deref(), ctx, flags).await,
        LensCommands::Notes {
            asset_id,
            lens,
            notes,
        } => notes::run(asset_id, lens, notes, ctx, flags).await,
    }
}

/// Result of a lens mutation, with the asset-level transition if there was one.
#[derive(Debug, Serialize)]
struct LensUpdateResponse {
    lens: Lens,
    previous_status: AssetStatus,
    asset: Asset,
}

impl LensUpdateResponse {
    fn new(lens: Lens, before: &Asset, after: Asset) -> Self {
        Self {
            lens,
            previous_status: before.status,
            asset: after,
        }
    }
}
