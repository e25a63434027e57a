use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use relname::cli::command_context::CommandContext;
use relname::cli::commands::parse::{ParseCommand, ParseCommandHandler};
use relname::cli::commands::quote::{QuoteCommand, QuoteCommandHandler};
use relname::cli::{Cli, Commands};
use relname::core::naming::LOG_ENV;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// トレーシングを初期化する
///
/// RELNAME_LOG が設定されていればそれを優先し、なければ --verbose で debug、それ以外は warn
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    // --config フラグの処理（絶対パスに変換）
    let config_path = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_path.join(p)
        }
    });

    let context = CommandContext::resolve(
        &project_path,
        config_path,
        cli.dialect.as_deref(),
        cli.format,
    )?;

    match cli.command {
        Commands::Parse { names } => {
            let handler = ParseCommandHandler::new();
            let command = ParseCommand {
                names,
                dialect: context.dialect,
                format: context.format,
            };
            handler.execute(&command)
        }
        Commands::Quote { names } => {
            let handler = QuoteCommandHandler::new();
            let command = QuoteCommand {
                names,
                dialect: context.dialect,
                format: context.format,
            };
            handler.execute(&command)
        }
    }
}
