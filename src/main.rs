mod cli;
mod helper;
mod input;
mod shell;

use std::{
    borrow::Cow,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use zero_regex::Locator;

use crate::{cli::Cli, helper::DynError, input::Evaluator, shell::Shell};

/// 入力の誤りや入出力エラーのときの終了コード
const EXIT_FAILURE: u8 = 2;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("ZERO_MATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zero-match: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<(), DynError> {
    debug!(window = %cli.window, find = cli.find, "starting");
    let evaluator = Evaluator::new(Locator::new(cli.window), cli.find);

    if cli.interactive {
        return Shell::new(cli.history_path(), evaluator).run();
    }

    let line = match cli.line.as_deref() {
        Some(line) => Cow::Borrowed(line),
        None => Cow::Owned(read_line()?),
    };

    let outcome = evaluator.eval(&line)?;
    println!("{outcome}");
    Ok(())
}

/// 標準入力から1行だけ読む
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
