// コアドメインロジック
//
// 修飾名の値オブジェクト、エラー型、設定を提供します。

pub mod config;
pub mod error;
pub mod naming;
pub mod qualified_name;
