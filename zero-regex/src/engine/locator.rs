use std::{fmt, iter, ops::Range, str::FromStr};

use tracing::trace;

use super::{comparator::compare, ANCHOR_END, ANCHOR_START, ESCAPE};

/// 探索に使う窓の決め方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowMode {
    /// 窓の長さをパターンの長さから決める
    ///
    /// 量指定子を含むパターンは、実際にマッチする長さと窓の長さが合わず見逃すことがある
    #[default]
    Fixed,
    /// アンカーと矛盾しないすべての窓を試す。左端が最も左、その中で最も長い窓を優先する
    Sliding,
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowMode::Fixed => write!(f, "fixed"),
            WindowMode::Sliding => write!(f, "sliding"),
        }
    }
}

/// `WindowMode`の文字列表現が不正
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown window mode: {0} (expected `fixed` or `sliding`)")]
pub struct ParseWindowModeError(String);

impl FromStr for WindowMode {
    type Err = ParseWindowModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(WindowMode::Fixed),
            "sliding" => Ok(WindowMode::Sliding),
            _ => Err(ParseWindowModeError(s.to_string())),
        }
    }
}

/// マッチした窓の位置。単位はバイトではなく文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// パターン両端のアンカー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// `^...$`
    Both,
    /// `^...`
    Start,
    /// `...$`
    End,
    /// アンカーなし
    Unanchored,
}

impl Anchor {
    fn detect(pattern: &[char]) -> Self {
        let start = pattern.first() == Some(&ANCHOR_START);
        let end = pattern.last() == Some(&ANCHOR_END);
        match (start, end) {
            (true, true) => Anchor::Both,
            (true, false) => Anchor::Start,
            (false, true) => Anchor::End,
            (false, false) => Anchor::Unanchored,
        }
    }

    /// `Comparator`に渡す部分。`...$`の`$`は外さずに渡す
    fn body(self, pattern: &[char]) -> &[char] {
        match self {
            Anchor::Both => &pattern[1..pattern.len() - 1],
            Anchor::Start => &pattern[1..],
            Anchor::End | Anchor::Unanchored => pattern,
        }
    }
}

type Windows = Box<dyn Iterator<Item = Span>>;

/// アンカーを解釈して、テキストの中からパターンにマッチする窓を探す
#[derive(Debug, Clone, Copy, Default)]
pub struct Locator {
    mode: WindowMode,
}

impl Locator {
    pub fn new(mode: WindowMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn search(&self, pattern: &str, text: &str) -> bool {
        self.find(pattern, text).is_some()
    }

    /// 最初にマッチした窓を返す
    pub fn find(&self, pattern: &str, text: &str) -> Option<Span> {
        let pattern = pattern.chars().collect::<Vec<_>>();
        let text = text.chars().collect::<Vec<_>>();

        let anchor = Anchor::detect(&pattern);
        let body = anchor.body(&pattern);
        let mut windows = match self.mode {
            WindowMode::Fixed => fixed_windows(anchor, &pattern, text.len()),
            WindowMode::Sliding => sliding_windows(anchor, text.len()),
        };

        let span = windows.find(|span| compare(body, &text[span.range()]))?;
        trace!(?anchor, mode = %self.mode, %span, "window matched");
        Some(span)
    }
}

/// パターンの長さから決めた固定長の窓
///
/// `\`を含むパターンは窓を1文字短くする。`\`がいくつあっても1文字だけ
fn fixed_windows(anchor: Anchor, pattern: &[char], len: usize) -> Windows {
    let escaped = usize::from(pattern.contains(&ESCAPE));
    match anchor {
        Anchor::Both => Box::new(iter::once(Span::new(0, len))),
        Anchor::Start => {
            let width = pattern.len().saturating_sub(1);
            Box::new(iter::once(Span::new(0, width.min(len))))
        }
        Anchor::End => {
            let width = pattern.len().saturating_sub(1 + escaped);
            // 幅0はテキスト全体
            let start = if width == 0 {
                0
            } else {
                len.saturating_sub(width)
            };
            Box::new(iter::once(Span::new(start, len)))
        }
        Anchor::Unanchored => {
            let width = pattern.len().saturating_sub(escaped);
            // テキストが窓より短くても1回は試す
            let count = (len + 1).saturating_sub(width).max(1);
            Box::new((0..count).map(move |start| Span::new(start, (start + width).min(len))))
        }
    }
}

fn sliding_windows(anchor: Anchor, len: usize) -> Windows {
    match anchor {
        Anchor::Both => Box::new(iter::once(Span::new(0, len))),
        Anchor::Start => Box::new((0..=len).rev().map(|end| Span::new(0, end))),
        Anchor::End => Box::new((0..=len).map(move |start| Span::new(start, len))),
        Anchor::Unanchored => Box::new((0..=len).flat_map(move |start| {
            (start..=len).rev().map(move |end| Span::new(start, end))
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(pattern: &str, text: &str) -> Option<Span> {
        Locator::new(WindowMode::Fixed).find(pattern, text)
    }

    fn sliding(pattern: &str, text: &str) -> Option<Span> {
        Locator::new(WindowMode::Sliding).find(pattern, text)
    }

    #[test]
    fn detect_anchor() {
        let detect = |s: &str| Anchor::detect(&s.chars().collect::<Vec<_>>());
        assert_eq!(detect("^a$"), Anchor::Both);
        assert_eq!(detect("^$"), Anchor::Both);
        assert_eq!(detect("^a"), Anchor::Start);
        assert_eq!(detect("^"), Anchor::Start);
        assert_eq!(detect("a$"), Anchor::End);
        assert_eq!(detect("$"), Anchor::End);
        assert_eq!(detect("a"), Anchor::Unanchored);
        assert_eq!(detect(""), Anchor::Unanchored);
    }

    #[test]
    fn parse_window_mode() {
        assert_eq!("fixed".parse::<WindowMode>(), Ok(WindowMode::Fixed));
        assert_eq!("sliding".parse::<WindowMode>(), Ok(WindowMode::Sliding));
        assert_eq!(
            "greedy".parse::<WindowMode>(),
            Err(ParseWindowModeError("greedy".to_string()))
        );
        assert_eq!(WindowMode::Sliding.to_string(), "sliding");
        assert_eq!(WindowMode::default(), WindowMode::Fixed);
    }

    #[test]
    fn both_anchors() {
        assert_eq!(fixed("^a.c$", "abc"), Some(Span::new(0, 3)));
        assert_eq!(fixed("^a.c$", "abcc"), None);
        assert_eq!(fixed("^$", ""), Some(Span::new(0, 0)));
        assert_eq!(fixed("^$", "a"), None);
        assert_eq!(fixed("^a*b$", "aaab"), Some(Span::new(0, 4)));
    }

    #[test]
    fn start_anchor() {
        assert_eq!(fixed("^ab", "abcd"), Some(Span::new(0, 2)));
        assert_eq!(fixed("^ab", "xab"), None);
        assert_eq!(fixed("^", "abc"), Some(Span::new(0, 0)));
        // 窓の長さは`len(pattern) - 1`で固定
        assert_eq!(fixed("^a+", "aaa"), Some(Span::new(0, 2)));
        assert_eq!(fixed("^ab*c", "abbbc"), None);
    }

    #[test]
    fn end_anchor() {
        assert_eq!(fixed("cd$", "abcd"), Some(Span::new(2, 4)));
        assert_eq!(fixed("cd$", "abcdx"), None);
        assert_eq!(fixed(r"\.$", "end."), Some(Span::new(3, 4)));
        assert_eq!(fixed("$", ""), Some(Span::new(0, 0)));
        assert_eq!(fixed("$", "abc"), None);
        // 窓がテキストより長いときはテキスト全体
        assert_eq!(fixed("abc$", "bc"), None);
        assert_eq!(fixed("a?bc$", "bc"), Some(Span::new(0, 2)));
    }

    #[test]
    fn unanchored() {
        assert_eq!(fixed("bc", "abcd"), Some(Span::new(1, 3)));
        assert_eq!(fixed("bd", "abcd"), None);
        assert_eq!(fixed(".", "xyz"), Some(Span::new(0, 1)));
        assert_eq!(fixed(".", ""), None);
        assert_eq!(fixed("", "abc"), Some(Span::new(0, 0)));
        assert_eq!(fixed(r"\.", "a.b"), Some(Span::new(1, 2)));
        assert_eq!(fixed("abc", "ab"), None);
    }

    #[test]
    fn unanchored_quantifier_in_fixed_window() {
        // 窓が`colou?r`の7文字なので`color`は見つからない
        assert_eq!(fixed("colou?r", "my colour"), None);
        assert_eq!(fixed("colou?r", "colour!"), None);
        assert_eq!(fixed("colou?r", "the color"), None);
        // テキストが窓より短いときは全体を比較するので見つかる
        assert_eq!(fixed("colou?r", "colour"), Some(Span::new(0, 6)));
        assert_eq!(fixed("colou?r", "color"), Some(Span::new(0, 5)));
        assert_eq!(fixed("ab?", "abc"), Some(Span::new(0, 3)));
    }

    #[test]
    fn sliding_windows_find_variable_length() {
        assert_eq!(sliding("colou?r", "the color"), Some(Span::new(4, 9)));
        assert_eq!(sliding("colou?r", "a colour!"), Some(Span::new(2, 8)));
        assert_eq!(sliding("ab*c", "xabbbcx"), Some(Span::new(1, 6)));
        assert_eq!(sliding("^ab*c", "abbbc--"), Some(Span::new(0, 5)));
        assert_eq!(sliding("b+$", "abbb"), Some(Span::new(1, 4)));
        assert_eq!(sliding("^a.c$", "abcc"), None);
        assert_eq!(sliding("z", "abc"), None);
    }

    #[test]
    fn sliding_accepts_fixed_matches() {
        let cases = [
            ("bc", "abcd"),
            ("^ab", "abcd"),
            ("cd$", "abcd"),
            (r"\.$", "end."),
            ("ab?", "abc"),
            ("^a.c$", "abc"),
        ];
        for (pattern, text) in cases {
            assert!(fixed(pattern, text).is_some(), "{pattern} / {text}");
            assert!(sliding(pattern, text).is_some(), "{pattern} / {text}");
        }
    }

    #[test]
    fn span_display() {
        let span = Span::new(2, 5);
        assert_eq!(span.to_string(), "2..5");
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::new(1, 1).is_empty());
    }
}
