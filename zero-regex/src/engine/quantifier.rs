use super::{comparator::compare, matcher::match_one};

/// 直前の1文字に付く量指定子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuantifierKind {
    /// `?`: 高々1回の繰り返し
    ZeroOrOne,
    /// `*`: 0回以上の繰り返し
    ZeroOrMany,
    /// `+`: 1回以上の繰り返し
    OneOrMany,
}

impl QuantifierKind {
    pub(crate) fn from_symbol(c: char) -> Option<Self> {
        match c {
            '?' => Some(QuantifierKind::ZeroOrOne),
            '*' => Some(QuantifierKind::ZeroOrMany),
            '+' => Some(QuantifierKind::OneOrMany),
            _ => None,
        }
    }

    /// 最低限必要な繰り返し回数
    fn min(self) -> usize {
        match self {
            QuantifierKind::OneOrMany => 1,
            QuantifierKind::ZeroOrOne | QuantifierKind::ZeroOrMany => 0,
        }
    }

    /// 繰り返し回数の上限。`None`は上限なし
    fn max(self) -> Option<usize> {
        match self {
            QuantifierKind::ZeroOrOne => Some(1),
            QuantifierKind::ZeroOrMany | QuantifierKind::OneOrMany => None,
        }
    }
}

/// 量指定子1つ分の評価
#[derive(Debug)]
pub(crate) struct Quantifier<'a> {
    kind: QuantifierKind,
    /// 繰り返される1文字。`.`も含む
    symbol: char,
    /// 繰り返しの後に続くパターン
    rest: &'a [char],
}

impl<'a> Quantifier<'a> {
    pub(crate) fn new(kind: QuantifierKind, symbol: char, rest: &'a [char]) -> Self {
        Self { kind, symbol, rest }
    }

    /// `text`の先頭を何文字か`symbol`で消費し、残りが`rest`とマッチする分け方があるか
    ///
    /// 消費する文字数を0(または1)から1つずつ増やして試す。
    /// `symbol`にマッチしない文字に当たるか上限に達したら終わり
    pub(crate) fn matches(&self, text: &[char]) -> bool {
        let mut taken = 0;
        loop {
            if taken >= self.kind.min() && self.matches_rest(&text[taken..], taken) {
                return true;
            }

            if self.kind.max().is_some_and(|max| taken >= max) {
                return false;
            }

            match text.get(taken) {
                Some(&c) if match_one(Some(self.symbol), Some(c)) => taken += 1,
                _ => return false,
            }
        }
    }

    fn matches_rest(&self, text: &[char], taken: usize) -> bool {
        // `?`で1文字消費して続きのパターンがなければ、残りのテキストに関係なく成功
        if self.kind == QuantifierKind::ZeroOrOne && taken == 1 && self.rest.is_empty() {
            return true;
        }
        compare(self.rest, text)
    }
}
