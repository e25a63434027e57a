// コマンド共通コンテキスト
//
// 設定ファイル読み込みと方言解決の重複をCLI層で集約する。

use crate::cli::OutputFormat;
use crate::core::config::{Config, Dialect};
use crate::services::config_loader::ConfigLoader;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub dialect: Dialect,
    pub format: OutputFormat,
}

impl CommandContext {
    /// 方言を解決してコンテキストを作成
    ///
    /// 優先順位: `--dialect` フラグ > 設定ファイル > 既定値
    pub fn resolve(
        project_path: &Path,
        custom_config_path: Option<PathBuf>,
        dialect_flag: Option<&str>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config = Self::load_config(project_path, custom_config_path)?;

        let dialect = match dialect_flag {
            Some(flag) => flag.parse::<Dialect>()?,
            None => config.map(|c| c.dialect).unwrap_or_default(),
        };
        debug!(%dialect, ?format, "resolved command context");

        Ok(Self { dialect, format })
    }

    /// 設定ファイルを読み込む
    ///
    /// 明示的に指定されたファイルは存在しなければエラー、
    /// 既定のファイルは存在しなければ None を返す。
    fn load_config(
        project_path: &Path,
        custom_config_path: Option<PathBuf>,
    ) -> Result<Option<Config>> {
        match custom_config_path {
            Some(path) => ConfigLoader::from_file(&path)
                .with_context(|| "Failed to read config file")
                .map(Some),
            None => ConfigLoader::load_optional(project_path),
        }
    }
}
