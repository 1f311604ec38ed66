use hub_config::{ENV_PREFIX, HubConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HubConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HubConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    let identity_prefix = format!("{ENV_PREFIX}IDENTITY");
    if !config.identity.is_configured() && has_env_prefix(&env_keys, &identity_prefix) {
        warnings.push(format!(
            "Identity appears unset while {identity_prefix}* env vars exist. Use double underscores (example: {identity_prefix}__USER_ID)."
        ));
    }

    let store_prefix = format!("{ENV_PREFIX}STORE");
    let store_nested = format!("{store_prefix}__");
    if has_env_prefix(&env_keys, &store_prefix) && !has_env_prefix(&env_keys, &store_nested) {
        warnings.push(format!(
            "{store_prefix}* env vars were ignored. Use double underscores (example: {store_prefix}__PATH)."
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use hub_config::HubConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_on_single_underscore_identity_key() {
        let config = HubConfig::default();
        let warnings =
            collect_unconfigured_warnings(&config, env(&[("REVIEWHUB_IDENTITY_USER_ID", "u1")]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("REVIEWHUB_IDENTITY__USER_ID"));
    }

    #[test]
    fn silent_when_identity_configured() {
        let mut config = HubConfig::default();
        config.identity.user_id = String::from("u1");
        let warnings =
            collect_unconfigured_warnings(&config, env(&[("REVIEWHUB_IDENTITY__USER_ID", "u1")]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_on_single_underscore_store_key() {
        let config = HubConfig::default();
        let warnings =
            collect_unconfigured_warnings(&config, env(&[("REVIEWHUB_STORE_PATH", "/tmp/x.db")]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("REVIEWHUB_STORE__PATH"));
    }

    #[test]
    fn silent_without_matching_env() {
        let config = HubConfig::default();
        let warnings = collect_unconfigured_warnings(&config, env(&[("HOME", "/root")]));
        assert!(warnings.is_empty());
    }
}
