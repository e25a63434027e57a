// 設定ファイル読み込みサービス
//
// core::config の純粋性を保つため、ファイルI/Oはこのサービスに集約する。

use crate::core::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// 設定ファイル読み込みサービス
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// YAMLファイルから設定を読み込む
    pub fn from_file(path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = content.parse()?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// ディレクトリ内の既定の設定ファイルを読み込む（存在しない場合は None）
    pub fn load_optional(dir: &Path) -> Result<Option<Config>> {
        let path = dir.join(Config::DEFAULT_CONFIG_PATH);
        if !path.exists() {
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }
}
