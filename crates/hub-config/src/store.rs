//! Local libSQL store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    ".reviewhub/hub.db".into()
}

/// Default number of attempts for transient write failures.
const fn default_retry_attempts() -> u32 {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database file path. `:memory:` opens a throwaway in-memory store.
    #[serde(default = "default_path")]
    pub path: String,

    /// Attempts (including the first) for writes that hit a busy or locked database.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            retry_attempts: default_retry_attempts(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Parent directory that must exist before the store is opened.
    ///
    /// `None` for in-memory stores and bare file names.
    #[must_use]
    pub fn parent_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        PathBuf::from(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_project_store() {
        let config = StoreConfig::default();
        assert_eq!(config.path, ".reviewhub/hub.db");
        assert_eq!(config.retry_attempts, 4);
        assert!(!config.is_in_memory());
        assert_eq!(config.parent_dir(), Some(PathBuf::from(".reviewhub")));
    }

    #[test]
    fn in_memory_has_no_parent() {
        let config = StoreConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
        assert_eq!(config.parent_dir(), None);
    }

    #[test]
    fn bare_file_name_has_no_parent() {
        let config = StoreConfig {
            path: "hub.db".into(),
            ..Default::default()
        };
        assert_eq!(config.parent_dir(), None);
    }
}
