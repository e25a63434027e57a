// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "relname";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".relname.yaml";

/// バイナリ名
pub const BINARY_NAME: &str = "relname";

/// 詳細ログを有効にする環境変数名
pub const LOG_ENV: &str = "RELNAME_LOG";
