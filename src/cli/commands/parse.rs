// parseコマンドハンドラー
//
// 修飾名の解析結果を表示します。
// - スキーマと識別子の抽出
// - プレーン表記とクォート表記の表示

use crate::cli::OutputFormat;
use crate::core::config::Dialect;
use crate::core::qualified_name::QualifiedName;
use crate::services::name_parser::extract_schema_qualified_name;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

/// parseコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ParseCommand {
    /// 解析対象の名前
    pub names: Vec<String>,
    /// クォートに使用する方言
    pub dialect: Dialect,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// 1件分の解析結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    pub input: String,
    pub schema: Option<String>,
    pub identifier: String,
    pub plain: String,
    pub quoted: String,
}

impl ParsedName {
    fn new(input: &str, name: &QualifiedName, dialect: Dialect) -> Self {
        Self {
            input: input.to_string(),
            schema: name.schema().map(str::to_string),
            identifier: name.identifier().to_string(),
            plain: name.to_string(),
            quoted: name.quoted(&dialect),
        }
    }
}

/// parseコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct ParseCommandHandler {}

impl ParseCommandHandler {
    /// 新しいParseCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// parseコマンドを実行
    ///
    /// いずれかの名前が解析できない場合はエラーを返す
    pub fn execute(&self, command: &ParseCommand) -> Result<String> {
        let parsed = self.parse_all(command)?;

        match command.format {
            OutputFormat::Json => serde_json::to_string_pretty(&parsed)
                .with_context(|| "Failed to serialize parse results"),
            OutputFormat::Text => Ok(self.format_text(&parsed)),
        }
    }

    /// すべての名前を解析
    pub fn parse_all(&self, command: &ParseCommand) -> Result<Vec<ParsedName>> {
        command
            .names
            .iter()
            .map(|raw| {
                let name = extract_schema_qualified_name(raw)
                    .with_context(|| format!("Failed to parse name: {:?}", raw))?;
                Ok::<_, anyhow::Error>(ParsedName::new(raw, &name, command.dialect))
            })
            .collect()
    }

    fn format_text(&self, parsed: &[ParsedName]) -> String {
        let mut output = String::new();

        for (i, entry) in parsed.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            let _ = writeln!(output, "{}", entry.input.bold());
            let _ = writeln!(
                output,
                "  {} {}",
                "schema:    ".dimmed(),
                entry.schema.as_deref().unwrap_or("(none)")
            );
            let _ = writeln!(output, "  {} {}", "identifier:".dimmed(), entry.identifier);
            let _ = writeln!(output, "  {} {}", "plain:     ".dimmed(), entry.plain);
            let _ = writeln!(output, "  {} {}", "quoted:    ".dimmed(), entry.quoted);
        }

        output.trim_end().to_string()
    }
}
