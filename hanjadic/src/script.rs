//! 文字種の判定
//!
//! このモジュールは、見出し語の文字構成（ハングル、漢字、ラテン文字）を判定する
//! 述語を提供します。分類器と整列器はここにある関数だけを使って文字種を判断します。

use std::ops::RangeInclusive;

/// ハングルとして扱うUnicodeの範囲
const HANGUL_RANGES: &[RangeInclusive<char>] = &[
    '\u{1100}'..='\u{11FF}', // Hangul Jamo
    '\u{3130}'..='\u{318F}', // Hangul Compatibility Jamo
    '\u{A960}'..='\u{A97F}', // Hangul Jamo Extended-A
    '\u{AC00}'..='\u{D7AF}', // Hangul Syllables
    '\u{D7B0}'..='\u{D7FF}', // Hangul Jamo Extended-B
    '\u{FFA0}'..='\u{FFDC}', // Halfwidth Hangul
];

/// 漢字として扱うUnicodeの範囲
const HANJA_RANGES: &[RangeInclusive<char>] = &[
    '\u{3400}'..='\u{4DBF}',   // CJK Unified Ideographs Extension A
    '\u{4E00}'..='\u{9FFF}',   // CJK Unified Ideographs
    '\u{F900}'..='\u{FAFF}',   // CJK Compatibility Ideographs
    '\u{20000}'..='\u{2FA1F}', // Extensions B-F and Compatibility Supplement
];

/// 完成形ハングル音節の範囲
const HANGUL_SYLLABLES: RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// 文字がハングル（字母を含む）であるかを判定します。
#[inline]
pub fn is_hangul_char(c: char) -> bool {
    HANGUL_RANGES.iter().any(|r| r.contains(&c))
}

/// 文字が完成形ハングル音節（1ブロック）であるかを判定します。
#[inline]
pub fn is_hangul_syllable(c: char) -> bool {
    HANGUL_SYLLABLES.contains(&c)
}

/// 文字が漢字であるかを判定します。
#[inline]
pub fn is_hanja_char(c: char) -> bool {
    HANJA_RANGES.iter().any(|r| r.contains(&c))
}

/// 文字列がハングルを1文字以上含むかを判定します。
///
/// 空白は無視されます。混在した文字列（例: `到着하다`）も `true` になります。
///
/// # 例
///
/// ```
/// use hanjadic::script::is_hangul;
///
/// assert!(is_hangul("도착하다"));
/// assert!(is_hangul("到着하다"));
/// assert!(!is_hangul("到着"));
/// ```
pub fn is_hangul(value: &str) -> bool {
    value.chars().any(is_hangul_char)
}

/// 文字列が漢字を1文字以上含むかを判定します。
pub fn is_hanja(value: &str) -> bool {
    value.chars().any(is_hanja_char)
}

/// 文字列が空白を除いてASCIIの英字のみで構成されているかを判定します。
///
/// 外来語のローマ字表記を見出しとするレコードを除外するために使います。
pub fn is_latin_word(value: &str) -> bool {
    let mut found = false;
    for c in value.chars().filter(|&c| c != ' ') {
        if !c.is_ascii_alphabetic() {
            return false;
        }
        found = true;
    }
    found
}

/// 文字列が空白を除いて字母（Unicodeのalphabetic）のみで構成されているかを判定します。
///
/// リンクから英語の意味を拾う際の判定に使います。`#` などの記号を含むと `false` です。
pub fn is_alphabetic_word(value: &str) -> bool {
    let mut found = false;
    for c in value.chars().filter(|&c| c != ' ') {
        if !c.is_alphabetic() {
            return false;
        }
        found = true;
    }
    found
}

/// 文字列がちょうど1文字であればその文字を返します。
pub fn single_char(value: &str) -> Option<char> {
    let mut it = value.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// 文字数（バイト数ではなく`char`の数）を返します。
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
