use hub_core::entities::Asset;

use crate::context::AppContext;

/// Load one of the current user's assets or fail with a lookup hint.
pub async fn require_asset(ctx: &AppContext, id: &str) -> anyhow::Result<Asset> {
    ctx.service
        .get_asset(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("asset '{id}' not found. Run 'crh asset list' to see ids."))
}
