use anyhow::Context;

use super::LensUpdateResponse;
use crate::cli::GlobalFlags;
use crate::commands::shared::asset::require_asset;
use crate::commands::shared::parse::parse_lens;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    asset_id: &str,
    lens: &str,
    notes: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let lens = parse_lens(lens)?;
    let before = require_asset(ctx, asset_id).await?;

    let after = ctx
        .service
        .update_overall_notes(&before, lens, notes)
        .await?
        .context("lens notes were not updated")?;

    output(&LensUpdateResponse::new(lens, &before, after), flags.format)
}
