use std::path::PathBuf;

use clap::Parser;
use zero_regex::WindowMode;

use crate::helper::HISTORY_FILE;

/// Match `pattern|text` lines with a small backtracking pattern matcher
#[derive(Debug, Parser)]
#[command(name = "zero-match", version, about, long_about = None)]
pub struct Cli {
    /// `pattern|text` to evaluate (read one line from stdin when omitted)
    #[arg(value_name = "LINE")]
    pub line: Option<String>,

    /// How candidate windows are chosen for unanchored and half-anchored patterns
    #[arg(
        short,
        long,
        env = "ZERO_MATCH_WINDOW",
        default_value = "fixed",
        value_name = "fixed|sliding"
    )]
    pub window: WindowMode,

    /// Print the matched span (`start..end`, in characters) instead of True/False
    #[arg(short, long)]
    pub find: bool,

    /// Start an interactive prompt
    #[arg(short, long, conflicts_with = "line")]
    pub interactive: bool,

    /// History file for the interactive prompt
    #[arg(long, env = "ZERO_MATCH_HISTORY", value_name = "PATH")]
    pub history: Option<PathBuf>,
}

impl Cli {
    /// 指定がなければホームディレクトリ直下、ホームがわからなければカレントディレクトリ
    pub fn history_path(&self) -> PathBuf {
        self.history
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(HISTORY_FILE)))
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
    }
}
