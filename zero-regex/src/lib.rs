//! 正規表現用エンジン
//!
//! パターンをコンパイルせず、呼び出しのたびにパターンとテキストを直接比較するバックトラック方式。
//! 使えるメタ文字は`.`,`\`,`?`,`*`,`+`,`^`,`$`のみ
//!
//! ```
//! use zero_regex::{find, matches_at, search, Span};
//!
//! assert!(search("^a.c$", "abc"));
//! assert!(!search("^a.c$", "abcc"));
//! assert!(matches_at("a*b", "aaab"));
//! assert_eq!(find("bc", "abcd"), Some(Span { start: 1, end: 3 }));
//! ```
//!
//! 窓の長さをパターン長から決めない探索は`WindowMode::Sliding`で有効になる
//!
//! ```
//! use zero_regex::{search, Locator, WindowMode};
//!
//! assert!(!search("ab*c", "xabbbcx"));
//! assert!(Locator::new(WindowMode::Sliding).search("ab*c", "xabbbcx"));
//! ```

pub mod engine;

pub use engine::{find, matches_at, search, Locator, ParseWindowModeError, Span, WindowMode};
