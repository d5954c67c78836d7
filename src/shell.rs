use std::path::PathBuf;

use rustyline::{error::ReadlineError, Editor};
use tracing::debug;

use crate::{helper::DynError, input::Evaluator};

/// 対話モード
#[derive(Debug)]
pub struct Shell {
    history: PathBuf,
    evaluator: Evaluator,
}

/// 直前の結果を顔で表したプロンプト
fn prompt(prev: bool) -> String {
    let face = if prev { '\u{1F642}' } else { '\u{1F480}' };
    format!("ZeroMatch {face} %> ")
}

impl Shell {
    pub fn new(history: PathBuf, evaluator: Evaluator) -> Self {
        Self { history, evaluator }
    }

    /// `exit`かCtrl+dで抜ける
    pub fn run(&self) -> Result<(), DynError> {
        let mut rl = Editor::<()>::new()?;
        if let Err(e) = rl.load_history(&self.history) {
            eprintln!("ZeroMatch: ヒストリファイルの読み込みに失敗: {e}")
        }

        let mut prev = true;
        let mut failure = None;
        loop {
            match rl.readline(&prompt(prev)) {
                Ok(line) => {
                    // パターンの空白は意味を持つので、評価には元の行を渡す
                    let line_trimmed = line.trim();
                    if line_trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str());

                    if line_trimmed == "exit" {
                        break;
                    }

                    match self.evaluator.eval(&line) {
                        Ok(outcome) => {
                            println!("{outcome}");
                            prev = outcome.is_match();
                        }
                        Err(e) => {
                            eprintln!("ZeroMatch: {e}");
                            prev = false;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => eprintln!("ZeroMatch: 終了はCtrl+d"),
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("ZeroMatch: 読み込みエラー\n{e}");
                    failure = Some(e);
                    break;
                }
            }
        }

        if let Err(e) = rl.save_history(&self.history) {
            eprintln!("ZeroMatch: ヒストリファイルへの書き込みに失敗: {e}");
        }
        debug!(history = %self.history.display(), "shell closed");

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
