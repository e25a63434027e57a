// SQL識別子クォートユーティリティ
//
// 各データベース方言用の識別子クォート関数を提供します。
// QualifiedName::quoted に注入するクォート機能として Dialect から使用されます。

use crate::core::config::Dialect;
use crate::core::qualified_name::IdentifierQuoter;

/// PostgreSQL用識別子クォート（ダブルクォート）
///
/// 識別子内のダブルクォートは二重にエスケープします。
///
/// # Examples
/// ```
/// use relname::adapters::sql_quote::quote_identifier_postgres;
/// assert_eq!(quote_identifier_postgres("users"), r#""users""#);
/// assert_eq!(quote_identifier_postgres(r#"table"name"#), r#""table""name""#);
/// ```
pub fn quote_identifier_postgres(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Redshift用識別子クォート（PostgreSQLと同じ規則）
///
/// # Examples
/// ```
/// use relname::adapters::sql_quote::quote_identifier_redshift;
/// assert_eq!(quote_identifier_redshift("events"), r#""events""#);
/// ```
pub fn quote_identifier_redshift(name: &str) -> String {
    quote_identifier_postgres(name)
}

/// MySQL用識別子クォート（バッククォート）
///
/// 識別子内のバッククォートは二重にエスケープします。
///
/// # Examples
/// ```
/// use relname::adapters::sql_quote::quote_identifier_mysql;
/// assert_eq!(quote_identifier_mysql("users"), "`users`");
/// assert_eq!(quote_identifier_mysql("table`name"), "`table``name`");
/// ```
pub fn quote_identifier_mysql(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// SQLite用識別子クォート（ダブルクォート）
pub fn quote_identifier_sqlite(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl IdentifierQuoter for Dialect {
    fn quote_identifier(&self, ident: &str) -> String {
        match self {
            Dialect::PostgreSQL => quote_identifier_postgres(ident),
            Dialect::Redshift => quote_identifier_redshift(ident),
            Dialect::MySQL => quote_identifier_mysql(ident),
            Dialect::SQLite => quote_identifier_sqlite(ident),
        }
    }
}
