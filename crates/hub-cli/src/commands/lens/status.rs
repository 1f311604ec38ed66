use anyhow::Context;
use hub_core::enums::LensStatus;

use super::LensUpdateResponse;
use crate::cli::GlobalFlags;
use crate::commands::shared::asset::require_asset;
use crate::commands::shared::parse::{parse_enum, parse_lens};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    asset_id: &str,
    lens: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let lens = parse_lens(lens)?;
    let status = parse_enum::<LensStatus>(status, "status")?;
    let before = require_asset(ctx, asset_id).await?;

    let after = ctx
        .service
        .update_lens_status(&before, lens, status)
        .await?
        .context("lens status was not updated")?;

    output(&LensUpdateResponse::new(lens, &before, after), flags.format)
}
