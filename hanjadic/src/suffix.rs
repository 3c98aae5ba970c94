//! 活用語尾の除去
//!
//! 動詞・形容詞・副詞の見出し語（辞書形）から、決まった語尾を取り除いて語根を得ます。
//! 規則は優先順位付きのテーブルで、先頭から順に調べて最初に一致したものだけを適用します。
//! 最長一致は行いません。
//!
//! ハングル形と漢字形には同じ処理を別々に適用します。辞書形の語尾はハングル形には必ず付きますが、
//! 漢字形（例: `到着하다`）には付く場合と付かない場合があるためです。

/// 語尾除去の規則
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuffixRule {
    /// 指定した語尾で終わる場合、その語尾を一単位として取り除きます。
    Ending(&'static str),

    /// 末尾の空白を取り除きます。
    TrailingWhitespace,
}

impl SuffixRule {
    /// 規則を適用します。
    ///
    /// # 戻り値
    ///
    /// 一致した場合は語尾を取り除いた文字列、一致しない場合は `None`
    pub fn strip<'a>(&self, word: &'a str) -> Option<&'a str> {
        match self {
            Self::Ending(ending) => word.strip_suffix(ending),
            Self::TrailingWhitespace => {
                let trimmed = word.trim_end();
                (trimmed.len() != word.len()).then_some(trimmed)
            }
        }
    }
}

/// 語尾除去の規則（優先順）
///
/// `막히다` は `히` や他の2文字語尾に分解せず、3文字のまま取り除く必要があります。
pub const INFLECTION_RULES: &[SuffixRule] = &[
    SuffixRule::Ending("하다"),
    SuffixRule::Ending("되다"),
    SuffixRule::Ending("보다"),
    SuffixRule::Ending("나다"),
    SuffixRule::Ending("치다"),
    SuffixRule::Ending("뜨다"),
    SuffixRule::Ending("막히다"),
    SuffixRule::Ending("잇다"),
    SuffixRule::Ending("을 먹다"),
    SuffixRule::Ending("쓰다"),
    SuffixRule::TrailingWhitespace,
    SuffixRule::Ending("—"),
    SuffixRule::Ending("히"),
    SuffixRule::Ending("로"),
];

/// 漢字表記を強制的に置き換える語
///
/// 文法形式から得られる漢字語根が誤っていることが分かっている語です。
/// キーは語尾除去後のハングル形です。
pub const HANJA_OVERRIDES: &[(&str, &[&str])] = &[("원래", &["元來", "原來"])];

/// 先頭から規則を調べ、最初に一致した語尾を取り除きます。
///
/// どの規則にも一致しなければ入力をそのまま返します。
///
/// # 例
///
/// ```
/// use hanjadic::suffix::strip_inflection;
///
/// assert_eq!("도착", strip_inflection("도착하다"));
/// assert_eq!("到着", strip_inflection("到着하다"));
/// assert_eq!("到着", strip_inflection("到着"));
/// ```
pub fn strip_inflection(word: &str) -> &str {
    INFLECTION_RULES
        .iter()
        .find_map(|rule| rule.strip(word))
        .unwrap_or(word)
}

/// 語尾除去後のハングル形に対する漢字表記の置き換えを返します。
pub fn hanja_override(hangul: &str) -> Option<&'static [&'static str]> {
    HANJA_OVERRIDES
        .iter()
        .find(|(word, _)| *word == hangul)
        .map(|(_, spellings)| *spellings)
}
