// 修飾名パーサーサービス
//
// `schema_name."table.name"` のような文字列からスキーマ修飾名を抽出します。
// 対応する形式の例:
//
// - table_name
// - "table.name"
// - schema_name.table_name
// - schema_name."table.name"
// - "schema_name".table_name
// - "schema.name"."table name"

use crate::core::error::{NameError, NameResult};
use crate::core::qualified_name::{IdentifierQuoter, QualifiedName};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// 非クォート部分（`"` `.` 空白以外の連続）またはクォート済み部分
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^".\t\n\x0B\x0C\r ]+|"[^"]*""#).expect("token pattern is a valid regex")
});

/// 修飾名として解釈するトークン数の上限
const MAX_PARTS: usize = 2;

/// 文字列を左から走査してトークンを抽出
///
/// 区切り文字と空白はトークンに含まれません。クォート済みトークンは
/// 前後のダブルクォートを含んだまま返します。
pub fn tokenize(raw: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(raw).map(|m| m.as_str()).collect()
}

/// 文字列からスキーマ修飾名を抽出
///
/// トークンが1つの場合は識別子のみ、2つの場合は「スキーマ.識別子」として扱います。
/// 3つ目以降のトークンは無視されます。
///
/// # Examples
/// ```
/// use relname::services::name_parser::extract_schema_qualified_name;
///
/// let name = extract_schema_qualified_name(r#"schema_name."table.name""#).unwrap();
/// assert_eq!(name.schema(), Some("schema_name"));
/// assert_eq!(name.identifier(), "table.name");
/// ```
pub fn extract_schema_qualified_name(raw: &str) -> NameResult<QualifiedName> {
    let tokens = tokenize(raw);
    trace!(input = raw, ?tokens, "tokenized qualified name");

    if tokens.len() > MAX_PARTS {
        debug!(
            input = raw,
            discarded = ?&tokens[MAX_PARTS..],
            "ignoring tokens beyond schema and identifier"
        );
    }

    match tokens.as_slice() {
        [] => Err(NameError::ambiguous_input(raw)),
        [identifier] => Ok(QualifiedName::new(None, identifier)),
        [schema, identifier, ..] => Ok(QualifiedName::new(Some(*schema), identifier)),
    }
}

/// 文字列を修飾名として解析し、各構成要素をクォートして返す
///
/// # Examples
/// ```
/// use relname::core::config::Dialect;
/// use relname::services::name_parser::quote_table_name;
///
/// let quoted = quote_table_name("public.users", &Dialect::PostgreSQL).unwrap();
/// assert_eq!(quoted, r#""public"."users""#);
/// ```
pub fn quote_table_name<Q>(raw: &str, quoter: &Q) -> NameResult<String>
where
    Q: IdentifierQuoter + ?Sized,
{
    extract_schema_qualified_name(raw).map(|name| name.quoted(quoter))
}

impl FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_schema_qualified_name(s)
    }
}
