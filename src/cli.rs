// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// Relname - schema-qualified SQL identifier tool
///
/// Parses possibly schema-qualified, possibly quoted SQL identifiers
/// and renders them in plain or dialect-quoted form.
#[derive(Parser, Debug)]
#[command(name = "relname")]
#[command(author = "Relname Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Schema-qualified SQL identifier parsing and quoting")]
#[command(long_about = "Relname - schema-qualified SQL identifier tool

Parses names such as `schema_name.\"table.name\"` into their schema and
identifier parts, and renders them back in plain or quoted form.

Supported dialects: PostgreSQL, Redshift, MySQL, SQLite")]
#[command(propagate_version = true)]
#[command(after_help = "EXAMPLES:
  relname parse 'schema_name.\"table.name\"'
  relname quote --dialect mysql public.users
  relname --format json parse '\"schema.name\".\"table name\"'")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dialect used for quoting (postgresql, redshift, mysql, sqlite)
    #[arg(short, long, global = true, value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse names into schema and identifier parts
    ///
    /// EXAMPLES:
    ///   relname parse table_name
    ///   relname parse 'schema_name."table.name"'
    Parse {
        /// Possibly schema-qualified names
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Print names quoted for the selected dialect
    ///
    /// EXAMPLES:
    ///   relname quote public.users
    ///   relname quote --dialect mysql 'app."order items"'
    Quote {
        /// Possibly schema-qualified names
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },
}
