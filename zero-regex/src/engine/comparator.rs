use super::{
    matcher::match_one,
    quantifier::{Quantifier, QuantifierKind},
    ANCHOR_END, ESCAPE,
};

/// パターンの残りとテキストの残りを先頭から順に比較する
///
/// テキストを最後まで消費したときのみマッチとみなす。
/// 量指定子が出てきたら`Quantifier`に残りを任せるので、再帰の深さはパターン中の量指定子の数で抑えられる
pub(crate) fn compare(mut pattern: &[char], mut text: &[char]) -> bool {
    loop {
        let (matched, pattern_tail) = match (pattern, text.first()) {
            // `$`がここまで残るのはパターンの最後だけ
            ([] | [ANCHOR_END], _) => return text.is_empty(),
            (_, None) => return false,
            // エスケープした文字は`.`も含めてそのまま比較する
            ([ESCAPE, escaped, tail @ ..], head) => (head == Some(escaped), tail),
            ([prev, next, tail @ ..], head) => {
                if let Some(kind) = QuantifierKind::from_symbol(*next) {
                    return Quantifier::new(kind, *prev, tail).matches(text);
                }
                (match_one(Some(*prev), head.copied()), &pattern[1..])
            }
            // 末尾に1つだけ残った`\`もここで普通の文字として扱う
            ([symbol, tail @ ..], head) => (match_one(Some(*symbol), head.copied()), tail),
        };

        if !matched {
            return false;
        }

        pattern = pattern_tail;
        text = &text[1..];
    }
}
