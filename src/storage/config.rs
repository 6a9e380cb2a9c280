//! 应用配置持久化
//!
//! 只保存界面偏好（主题、录入选项），任务数据从不落盘。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ensure_tally_dir, load_toml, save_toml, tally_dir};
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub entry: EntryConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 录入选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    /// 工时 +/- 调节步长
    #[serde(default = "default_hours_step")]
    pub hours_step: f64,
}

fn default_hours_step() -> f64 {
    0.5
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            hours_step: default_hours_step(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    tally_dir().join("config.toml")
}

/// 从指定路径加载配置（严格：解析失败报错）
fn read_config(path: &Path) -> Result<Config> {
    load_toml(path)
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    read_config(&path).unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    ensure_tally_dir()?;
    save_toml(&config_path(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.name, "Auto");
        assert_eq!(config.entry.hours_step, 0.5);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme.name = "Dracula".to_string();
        config.entry.hours_step = 1.0;

        save_toml(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded.theme.name, "Dracula");
        assert_eq!(loaded.entry.hours_step, 1.0);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"Nord\"\n").unwrap();

        let loaded = read_config(&path).unwrap();
        assert_eq!(loaded.theme.name, "Nord");
        assert_eq!(loaded.entry.hours_step, 0.5);
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = = broken").unwrap();

        assert!(read_config(&path).is_err());
    }
}
