use hub_core::entities::Asset;
use hub_core::filter::{AssetFilter, sort_by_recent_activity};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssetListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_lens, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AssetListResponse {
    /// Matches before the limit was applied.
    total: usize,
    assets: Vec<Asset>,
}

pub async fn run(args: &AssetListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let filter = build_filter(args)?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let assets = ctx.service.load_assets().await?;
    let response = select(assets, &filter, usize::try_from(limit)?);
    output(&response, flags.format)
}

fn build_filter(args: &AssetListArgs) -> anyhow::Result<AssetFilter> {
    Ok(AssetFilter {
        search: args.search.clone(),
        status: parse_opt_enum(args.status.as_deref(), "status")?,
        risk_level: parse_opt_enum(args.risk.as_deref(), "risk")?,
        channel: parse_opt_enum(args.channel.as_deref(), "channel")?,
        asset_type: parse_opt_enum(args.asset_type.as_deref(), "type")?,
        lens_not_approved: args.lens_not_approved.as_deref().map(parse_lens).transpose()?,
    })
}

fn select(mut assets: Vec<Asset>, filter: &AssetFilter, limit: usize) -> AssetListResponse {
    sort_by_recent_activity(&mut assets);
    assets.retain(|asset| filter.matches(asset));
    let total = assets.len();
    assets.truncate(limit);
    AssetListResponse { total, assets }
}
