//! 命令行配置
//!
//! 可选的 JSON 配置文件，缺省字段取默认值；命令行参数优先于配置文件。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_core::Variant;
use serde::{Deserialize, Serialize};

/// 命令行配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// 棋盘变体名称
    pub variant: String,
    /// 日志过滤指令（EnvFilter 语法）
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Standard.name().to_string(),
            log_filter: "chess_cli=info,chess_core=info".to_string(),
        }
    }
}

impl CliConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))
    }

    /// 有配置文件时加载，否则使用默认值
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::load_or_default(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.variant, "standard");
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "variant": "hexagonal" }"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.variant, "hexagonal");
        assert_eq!(config.log_filter, CliConfig::default().log_filter);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing.json");
        assert!(CliConfig::load(&missing).is_err());

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ variant").unwrap();
        let err = CliConfig::load(&broken).unwrap_err();
        assert!(err.to_string().contains("解析配置文件失败"));
    }
}
