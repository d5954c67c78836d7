use super::WILDCARD;

/// パターンの1文字とテキストの1文字を比較する
///
/// `None`は列の端で文字がないことを表す。パターン側がない場合は何にでもマッチする
pub(crate) fn match_one(pattern: Option<char>, text: Option<char>) -> bool {
    match (pattern, text) {
        (None, _) => true,
        (_, None) => false,
        (Some(WILDCARD), Some(_)) => true,
        (Some(p), Some(t)) => p == t,
    }
}
