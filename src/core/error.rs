// エラー型定義
//
// 修飾名の解析で発生するエラー型を提供します。
// thiserrorを使用して NameError を定義します。

use thiserror::Error;

/// 修飾名エラー
///
/// 生の文字列から修飾名を抽出できなかった場合に返されます。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Ambiguous input (no token could be extracted)
    #[error("Ambiguous qualified name: no identifier found in '{input}'")]
    AmbiguousInput {
        /// 解析対象の入力文字列
        input: String,
    },
}

impl NameError {
    /// 入力が曖昧なエラーを作成
    pub fn ambiguous_input(input: impl Into<String>) -> Self {
        NameError::AmbiguousInput {
            input: input.into(),
        }
    }

    /// 入力が曖昧なエラーかどうか
    pub fn is_ambiguous_input(&self) -> bool {
        matches!(self, NameError::AmbiguousInput { .. })
    }

    /// エラーの原因となった入力文字列を取得
    pub fn input(&self) -> &str {
        match self {
            NameError::AmbiguousInput { input } => input,
        }
    }
}

/// 修飾名処理の結果型
pub type NameResult<T> = Result<T, NameError>;
