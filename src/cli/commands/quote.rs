// quoteコマンドハンドラー
//
// 修飾名を指定された方言のクォート規則で表示します。

use crate::cli::OutputFormat;
use crate::core::config::Dialect;
use crate::services::name_parser::quote_table_name;
use anyhow::{Context, Result};
use serde::Serialize;

/// quoteコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct QuoteCommand {
    /// クォート対象の名前
    pub names: Vec<String>,
    /// クォートに使用する方言
    pub dialect: Dialect,
    /// 出力フォーマット
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct QuotedName<'a> {
    input: &'a str,
    dialect: Dialect,
    quoted: String,
}

/// quoteコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct QuoteCommandHandler {}

impl QuoteCommandHandler {
    /// 新しいQuoteCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// quoteコマンドを実行
    pub fn execute(&self, command: &QuoteCommand) -> Result<String> {
        let quoted = command
            .names
            .iter()
            .map(|raw| {
                let quoted = quote_table_name(raw, &command.dialect)
                    .with_context(|| format!("Failed to quote name: {:?}", raw))?;
                Ok::<_, anyhow::Error>(QuotedName {
                    input: raw,
                    dialect: command.dialect,
                    quoted,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        match command.format {
            OutputFormat::Json => serde_json::to_string_pretty(&quoted)
                .with_context(|| "Failed to serialize quote results"),
            OutputFormat::Text => Ok(quoted
                .iter()
                .map(|q| q.quoted.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
