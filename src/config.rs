use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 插件配置。一般不需要改，关键词要和 Wox 里注册的 ActionKeyword 一致
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 改写查询框时用的触发关键词
    pub keyword: String,
    /// 每行结果的图标路径
    pub icon_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword: "nbp".to_string(),
            icon_path: "icon.png".to_string(),
        }
    }
}

impl Config {
    pub fn load_or_default() -> Result<Self> {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let config_path = PathBuf::from(home).join(".config/wox-bundlephobia/config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}
