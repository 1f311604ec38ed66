use anyhow::Context;
use hub_core::catalog::find_item;
use hub_core::enums::Lens;

use super::LensUpdateResponse;
use crate::cli::GlobalFlags;
use crate::commands::shared::asset::require_asset;
use crate::commands::shared::parse::parse_lens;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    asset_id: &str,
    lens: &str,
    item_id: &str,
    passed: bool,
    notes: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let lens = parse_lens(lens)?;
    require_known_item(lens, item_id)?;
    let before = require_asset(ctx, asset_id).await?;

    let after = ctx
        .service
        .record_checklist_response(&before, lens, item_id, passed, notes)
        .await?
        .context("checklist response was not recorded")?;

    output(&LensUpdateResponse::new(lens, &before, after), flags.format)
}

/// The store silently ignores unknown items; the CLI reports them instead.
fn require_known_item(lens: Lens, item_id: &str) -> anyhow::Result<()> {
    if find_item(lens, item_id).is_none() {
        anyhow::bail!(
            "unknown checklist item '{item_id}' for lens {lens}. Run 'crh checklist {}' to list items.",
            lens.as_str()
        );
    }
    Ok(())
}
