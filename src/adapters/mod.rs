// Adapters Layer
// ホスト側データベースドライバの識別子クォート規則を提供

pub mod sql_quote;
