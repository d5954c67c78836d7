use std::fmt;

use tracing::debug;
use zero_regex::{Locator, Span};

/// 入力行の形式が不正
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// パターンとテキストを区切る`|`がない
    #[error("missing `|` between pattern and text: {0:?}")]
    MissingSeparator(String),
}

/// `pattern|text`を分解したもの
#[derive(Debug, PartialEq, Eq)]
pub struct Query<'a> {
    pub pattern: &'a str,
    pub text: &'a str,
}

/// 1行を最初の`|`でパターンとテキストに分ける
///
/// 行末の改行だけ取り除き、それ以外の空白はそのまま残す
pub fn parse_line(line: &str) -> Result<Query<'_>, InputError> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);

    let Some((pattern, text)) = line.split_once('|') else {
        return Err(InputError::MissingSeparator(line.to_string()));
    };

    Ok(Query { pattern, text })
}

/// 1回の評価結果
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// マッチしたかどうかだけ
    Matched(bool),
    /// マッチした位置
    Found(Option<Span>),
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        match self {
            Outcome::Matched(matched) => *matched,
            Outcome::Found(span) => span.is_some(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Matched(true) => write!(f, "True"),
            Outcome::Matched(false) => write!(f, "False"),
            Outcome::Found(Some(span)) => write!(f, "{span}"),
            Outcome::Found(None) => write!(f, "None"),
        }
    }
}

/// 入力行を受け取って`Locator`で評価する
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    locator: Locator,
    /// 位置を出力するか
    find: bool,
}

impl Evaluator {
    pub fn new(locator: Locator, find: bool) -> Self {
        Self { locator, find }
    }

    pub fn eval(&self, line: &str) -> Result<Outcome, InputError> {
        let Query { pattern, text } = parse_line(line)?;
        debug!(pattern, text, mode = %self.locator.mode(), "evaluating");

        let outcome = if self.find {
            Outcome::Found(self.locator.find(pattern, text))
        } else {
            Outcome::Matched(self.locator.search(pattern, text))
        };
        Ok(outcome)
    }
}
