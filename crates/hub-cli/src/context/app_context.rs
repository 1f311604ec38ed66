use anyhow::Context;
use hub_config::HubConfig;
use hub_db::retry::RetryConfig;
use hub_db::service::HubService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HubService,
    pub config: HubConfig,
}

impl AppContext {
    /// Open the store named by `--db` or `store.path` and bind the configured reviewer.
    pub async fn init(mut config: HubConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(path) = flags.db.as_deref() {
            config.store.path = path.to_string();
        }

        if let Some(parent) = config.store.parent_dir() {
            std::fs::create_dir_all(&parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }

        let identity = config.identity.reviewer();
        if identity.is_none() {
            tracing::debug!("no reviewer identity configured; running signed out");
        }

        let retry = RetryConfig::with_attempts(config.store.retry_attempts);
        let service = HubService::new_local(&config.store.path, identity, retry)
            .await
            .with_context(|| format!("failed to open review store at {}", config.store.path))?
            .with_demo_seed(config.general.seed_demo_assets);

        Ok(Self { service, config })
    }

    /// Fail with setup guidance when no reviewer is configured.
    pub fn require_signed_in(&self) -> anyhow::Result<&str> {
        self.service.user_id().ok_or_else(|| {
            anyhow::anyhow!(
                "no reviewer identity configured. Set identity.user_id in .reviewhub/config.toml \
                 or REVIEWHUB_IDENTITY__USER_ID."
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use hub_config::HubConfig;
    use hub_core::enums::AssetStatus;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(db: Option<String>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            db,
        }
    }

    fn config(user_id: &str) -> HubConfig {
        let mut config = HubConfig::default();
        config.identity.user_id = user_id.to_string();
        config.identity.display_name = String::from("Dana");
        config
    }

    #[tokio::test]
    async fn db_flag_overrides_configured_path() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("hub.db");
        let path = path.to_string_lossy().to_string();

        let ctx = AppContext::init(config("user_1"), &flags(Some(path.clone())))
            .await
            .expect("context should init");

        assert_eq!(ctx.config.store.path, path);
        assert!(dir.path().join("nested").is_dir());
    }

    #[tokio::test]
    async fn seed_setting_reaches_service() {
        let mut cfg = config("user_1");
        cfg.general.seed_demo_assets = false;
        let ctx = AppContext::init(cfg, &flags(Some(":memory:".into())))
            .await
            .expect("context should init");

        assert!(ctx.service.load_assets().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn seeds_demo_assets_by_default() {
        let ctx = AppContext::init(config("user_1"), &flags(Some(":memory:".into())))
            .await
            .expect("context should init");

        let assets = ctx.service.load_assets().await.expect("load");
        assert!(assets.iter().any(|a| a.status == AssetStatus::Blocked));
        assert_eq!(ctx.require_signed_in().expect("signed in"), "user_1");
    }

    #[tokio::test]
    async fn signed_out_context_refuses_mutations() {
        let ctx = AppContext::init(config(""), &flags(Some(":memory:".into())))
            .await
            .expect("context should init");

        let err = ctx.require_signed_in().expect_err("should be signed out");
        assert!(err.to_string().contains("REVIEWHUB_IDENTITY__USER_ID"));
    }
}
