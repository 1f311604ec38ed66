use anyhow::Context;
use hub_core::entities::NewAsset;
use hub_core::enums::{AssetType, Channel, RiskLevel};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssetAddArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &AssetAddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_signed_in()?;
    let input = new_asset(args)?;

    let asset = ctx
        .service
        .create_asset(input)
        .await?
        .context("asset was not created")?;

    output(&json!({ "asset": asset }), flags.format)
}

fn new_asset(args: &AssetAddArgs) -> anyhow::Result<NewAsset> {
    Ok(NewAsset {
        title: args.title.clone(),
        asset_type: parse_enum::<AssetType>(&args.asset_type, "type")?,
        channel: parse_enum::<Channel>(&args.channel, "channel")?,
        link_or_path: args.link.clone(),
        description: args.description.clone(),
        tags: args.tag.clone(),
        risk_level: parse_enum::<RiskLevel>(&args.risk, "risk")?,
    })
}

#[cfg(test)]
mod tests {
    use hub_core::enums::{AssetStatus, AssetType, Channel, RiskLevel};

    use super::new_asset;
    use crate::cli::subcommands::AssetAddArgs;
    use crate::context::test_support::test_context;

    fn args(title: &str) -> AssetAddArgs {
        AssetAddArgs {
            title: title.to_string(),
            asset_type: String::from("landing-page"),
            channel: String::from("site"),
            risk: String::from("high"),
            link: Some(String::from("https://staging.example.com/offer")),
            description: None,
            tag: vec![String::from(" offer "), String::new()],
        }
    }

    #[test]
    fn parses_enum_arguments() {
        let input = new_asset(&args("Offer page")).expect("input should build");
        assert_eq!(input.asset_type, AssetType::LandingPage);
        assert_eq!(input.channel, Channel::Site);
        assert_eq!(input.risk_level, RiskLevel::High);
    }

    #[test]
    fn rejects_unknown_type() {
        let mut bad = args("Offer page");
        bad.asset_type = String::from("billboard");
        assert!(new_asset(&bad).is_err());
    }

    #[tokio::test]
    async fn created_asset_is_a_draft_with_clean_tags() {
        let ctx = test_context("user_1", false).await;
        let asset = ctx
            .service
            .create_asset(new_asset(&args("Offer page")).expect("input"))
            .await
            .expect("create")
            .expect("signed in");

        assert_eq!(asset.status, AssetStatus::Draft);
        assert_eq!(asset.tags.iter().cloned().collect::<Vec<_>>(), vec!["offer"]);
        assert_eq!(asset.created_by, "user_1");
    }

    #[tokio::test]
    async fn blank_title_is_a_validation_error() {
        let ctx = test_context("user_1", false).await;
        let result = ctx
            .service
            .create_asset(new_asset(&args("   ")).expect("input"))
            .await;
        assert!(result.is_err());
    }
}
