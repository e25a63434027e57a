// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod parse;
pub mod quote;
