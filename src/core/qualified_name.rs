// スキーマ修飾名
//
// リレーション名や型名などの「スキーマ.識別子」形式の名前を保持する値オブジェクトです。
// schema と identifier は二重クォートを避けるためクォートを外した状態で保持します。

use serde::Serialize;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

/// 修飾名の区切り文字
pub const SEPARATOR: &str = ".";

/// 識別子クォート機能
///
/// ホスト側のデータベースドライバが提供する識別子クォート規則を表します。
/// `Fn(&str) -> String` を満たす関数やクロージャはそのまま利用できます。
pub trait IdentifierQuoter {
    /// 識別子をクォートする
    fn quote_identifier(&self, ident: &str) -> String;
}

impl<F> IdentifierQuoter for F
where
    F: Fn(&str) -> String,
{
    fn quote_identifier(&self, ident: &str) -> String {
        self(ident)
    }
}

/// スキーマ修飾名
///
/// # Examples
/// ```
/// use relname::core::qualified_name::QualifiedName;
///
/// let name = QualifiedName::new(Some("\"public\""), "users");
/// assert_eq!(name.schema(), Some("public"));
/// assert_eq!(name.to_string(), "public.users");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct QualifiedName {
    schema: Option<String>,
    identifier: String,
}

impl QualifiedName {
    /// スキーマと識別子から修飾名を作成
    ///
    /// 先頭と末尾の `"` をそれぞれ1文字ずつ取り除きます。
    pub fn new(schema: Option<&str>, identifier: &str) -> Self {
        Self {
            schema: schema.map(unquote),
            identifier: unquote(identifier),
        }
    }

    /// スキーマ名（未指定の場合は None）
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// 識別子
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// スキーマ修飾されているかどうか
    pub fn is_qualified(&self) -> bool {
        self.schema.is_some()
    }

    /// None を除いた構成要素のリスト
    pub fn parts(&self) -> Vec<&str> {
        self.schema
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.identifier.as_str()))
            .collect()
    }

    /// 各構成要素をクォートして区切り文字で結合
    ///
    /// # Examples
    /// ```
    /// use relname::core::qualified_name::QualifiedName;
    ///
    /// let quote = |p: &str| format!("\"{}\"", p);
    /// let name = QualifiedName::new(Some("s"), "t");
    /// assert_eq!(name.quoted(&quote), r#""s"."t""#);
    /// ```
    pub fn quoted<Q>(&self, quoter: &Q) -> String
    where
        Q: IdentifierQuoter + ?Sized,
    {
        self.parts()
            .into_iter()
            .map(|p| quoter.quote_identifier(p))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    /// 構成要素から導出したハッシュキー
    pub fn hash_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts().join(SEPARATOR))
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.parts() == other.parts()
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts().hash(state);
    }
}

/// 先頭と末尾のダブルクォートをそれぞれ1つだけ取り除く
fn unquote(part: &str) -> String {
    let part = part.strip_prefix('"').unwrap_or(part);
    let part = part.strip_suffix('"').unwrap_or(part);
    part.to_string()
}
