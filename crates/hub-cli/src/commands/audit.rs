use hub_core::entities::AuditEntry;
use hub_core::enums::AuditAction;
use hub_db::repos::audit::AuditFilter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuditResponse {
    entries: Vec<AuditEntry>,
}

/// Handle `crh audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let filter = build_filter(args, flags.limit)?;
    let entries = ctx.service.query_audit(&filter).await?;
    output(&AuditResponse { entries }, flags.format)
}

fn build_filter(args: &AuditArgs, limit: Option<u32>) -> anyhow::Result<AuditFilter> {
    Ok(AuditFilter {
        asset_id: args.asset.clone(),
        action: parse_opt_enum::<AuditAction>(args.action.as_deref(), "action")?,
        limit,
    })
}
