mod app_context;
mod config_warnings;

use anyhow::Context;
use hub_config::HubConfig;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;

/// Load configuration from defaults, TOML files, `.env`, and `REVIEWHUB_*` env.
pub fn load_config() -> anyhow::Result<HubConfig> {
    HubConfig::load_with_dotenv().context("failed to load reviewhub configuration")
}

#[cfg(test)]
pub mod test_support {
    use hub_config::HubConfig;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    /// In-memory context for `user_id`; an empty id runs signed out.
    pub async fn test_context(user_id: &str, seed_demo: bool) -> AppContext {
        let mut config = HubConfig::default();
        config.identity.user_id = user_id.to_string();
        config.identity.display_name = String::from("Test Reviewer");
        config.general.seed_demo_assets = seed_demo;
        let flags = GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            db: Some(String::from(":memory:")),
        };
        AppContext::init(config, &flags)
            .await
            .expect("in-memory context should init")
    }
}
