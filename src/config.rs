use crate::registry::{DEFAULT_REGISTRY_URL, DEFAULT_SEARCH_LIMIT};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "quickinstall.json";
pub const PROJECT_MARKER: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub debug: bool,
    pub registry: String,
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            registry: DEFAULT_REGISTRY_URL.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Config {
    /// 读取工作目录下的 quickinstall.json，读取或解析失败时使用默认值
    pub fn load(dir: &Path) -> Self {
        match Self::try_load(dir) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::debug!("Ignoring {}: {}", CONFIG_FILE_NAME, e);
                Self::default()
            }
        }
    }

    fn try_load(dir: &Path) -> Result<Option<Self>> {
        if !list_contains(dir, CONFIG_FILE_NAME) {
            return Ok(None);
        }
        let content = fs::read_to_string(dir.join(CONFIG_FILE_NAME))?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(Some(config))
    }

    /// 配置与命令行参数取或
    pub fn effective_debug(&self, flag: bool) -> bool {
        self.debug || flag
    }
}

/// 目录中是否有 package.json
pub fn is_project(dir: &Path) -> bool {
    list_contains(dir, PROJECT_MARKER)
}

fn list_contains(dir: &Path, file_name: &str) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .any(|entry| entry.file_name() == file_name)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }

    #[test]
    fn reads_debug_flag() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "debug": true }"#).unwrap();

        let config = Config::load(dir.path());
        assert!(config.debug);
        assert_eq!(config.registry, DEFAULT_REGISTRY_URL);
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn reads_registry_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "registry": "https://npm.example.com", "searchLimit": 5 }"#,
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert!(!config.debug);
        assert_eq!(config.registry, "https://npm.example.com");
        assert_eq!(config.search_limit, 5);
    }

    #[test]
    fn broken_file_is_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ debug: yes").unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }

    #[test]
    fn flag_cannot_turn_config_debug_off() {
        let on = Config {
            debug: true,
            ..Config::default()
        };
        let off = Config::default();

        assert!(on.effective_debug(false));
        assert!(on.effective_debug(true));
        assert!(off.effective_debug(true));
        assert!(!off.effective_debug(false));
    }

    #[test]
    fn project_detection() {
        let dir = TempDir::new().unwrap();
        assert!(!is_project(dir.path()));

        fs::write(dir.path().join(PROJECT_MARKER), "{}").unwrap();
        assert!(is_project(dir.path()));
    }

    #[test]
    fn unreadable_dir_is_not_a_project() {
        let dir = TempDir::new().unwrap();
        assert!(!is_project(&dir.path().join("missing")));
    }
}
