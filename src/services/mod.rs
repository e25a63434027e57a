// Services Layer
// 修飾名の解析と設定ファイルの読み込み

pub mod config_loader;
pub mod name_parser;
