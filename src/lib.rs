// Relnameライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインロジック（修飾名の値オブジェクト、エラー、設定）
// - adapters: 方言ごとの識別子クォート規則
// - services: 修飾名の解析と設定ファイルの読み込み

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;

pub use crate::core::error::NameError;
pub use crate::core::qualified_name::{IdentifierQuoter, QualifiedName};
pub use crate::services::name_parser::{extract_schema_qualified_name, quote_table_name};
