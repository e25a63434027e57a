// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML形式）の内容と、
// 識別子クォートに使用するデータベース方言を定義します。

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// データベース方言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(rename = "postgresql")]
    PostgreSQL,
    #[serde(rename = "redshift")]
    Redshift,
    #[serde(rename = "mysql")]
    MySQL,
    #[serde(rename = "sqlite")]
    SQLite,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::PostgreSQL => write!(f, "postgresql"),
            Dialect::Redshift => write!(f, "redshift"),
            Dialect::MySQL => write!(f, "mysql"),
            Dialect::SQLite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSQL),
            "redshift" => Ok(Dialect::Redshift),
            "mysql" => Ok(Dialect::MySQL),
            "sqlite" => Ok(Dialect::SQLite),
            other => Err(anyhow!(
                "Unsupported dialect: '{}'. Supported dialects: postgresql, redshift, mysql, sqlite",
                other
            )),
        }
    }
}

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 設定ファイルのバージョン
    pub version: String,

    /// 識別子クォートに使用するデータベース方言
    #[serde(default)]
    pub dialect: Dialect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            dialect: Dialect::default(),
        }
    }
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = crate::core::naming::CONFIG_FILE;

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(anyhow!("Config file version is not specified"));
        }

        Ok(())
    }
}

/// std::str::FromStrトレイトの実装
impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}
