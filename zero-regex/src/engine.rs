mod comparator;
mod locator;
mod matcher;
mod quantifier;

pub use locator::{Locator, ParseWindowModeError, Span, WindowMode};

/// 任意の1文字にマッチ
const WILDCARD: char = '.';
/// 次の1文字を特殊文字として扱わない
const ESCAPE: char = '\\';
/// テキストの先頭
const ANCHOR_START: char = '^';
/// テキストの末尾
const ANCHOR_END: char = '$';

/// パターンがテキスト全体と一致するか検証する
///
/// 前方一致ではなく、テキストを最後まで消費できたときのみ`true`
///
/// ```
/// use zero_regex::matches_at;
///
/// assert!(matches_at("a?b", "b"));
/// assert!(matches_at(r"\.", "."));
/// assert!(!matches_at("a+b", "b"));
/// ```
pub fn matches_at(pattern: &str, text: &str) -> bool {
    let pattern = pattern.chars().collect::<Vec<_>>();
    let text = text.chars().collect::<Vec<_>>();
    comparator::compare(&pattern, &text)
}

/// `^`,`$`を解釈して、テキストのどこかにパターンが現れるか検証する
///
/// 窓はパターン長から決まる固定長 (`WindowMode::Fixed`)
pub fn search(pattern: &str, text: &str) -> bool {
    Locator::default().search(pattern, text)
}

/// `search`と同じ探索を行い、最初にマッチした窓の位置を返す
pub fn find(pattern: &str, text: &str) -> Option<Span> {
    Locator::default().find(pattern, text)
}
