//! 漢字表記とハングル形の位置合わせ
//!
//! 辞書ソースでは、ハングル形では空白で区切られた複合語の漢字表記が、空白なしで
//! 詰めて書かれていることがあります（例: `歸還不能地點` と `귀환 불능 지점`）。
//! このモジュールは、ハングル形の空白位置に合わせて漢字表記に空白を挿入し、
//! 1文字ずつ対応する表記を作ります。

use crate::script;

/// 1つの漢字表記フィールドに複数の表記を並べるときの区切り文字（全角スラッシュ）
pub const ALTERNATIVE_DELIMITER: char = '／';

/// 位置合わせの結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// ハングル形と同じ文字数に揃えた漢字表記
    pub spelling: String,

    /// 漢字が尽きたため空白で埋めた位置の数
    pub padded: usize,

    /// ハングル形に対応付けられずに残った漢字の数
    pub leftover: usize,
}

impl Alignment {
    /// 漢字とハングル音節が過不足なく対応したかどうか
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.padded == 0 && self.leftover == 0
    }
}

/// 漢字表記をハングル形に位置合わせし、詳細な結果を返します。
///
/// ハングル形を左から走査し、空白の位置には漢字を消費せずに空白を出力します。
/// それ以外の位置では未消費の次の漢字を出力します。漢字表記中の空白は消費の対象になりません。
///
/// # 引数
///
/// * `hanja` - 漢字表記
/// * `hangul` - ハングル形
///
/// # 戻り値
///
/// 位置合わせの結果。`spelling` の文字数は常に `hangul` の文字数と等しくなります。
pub fn align_with_report(hanja: &str, hangul: &str) -> Alignment {
    let mut dense = hanja.chars().filter(|&c| c != ' ');
    let mut spelling = String::with_capacity(hanja.len() + hangul.len());
    let mut padded = 0;

    for c in hangul.chars() {
        if c == ' ' {
            spelling.push(' ');
            continue;
        }
        if let Some(h) = dense.next() {
            spelling.push(h);
        } else {
            spelling.push(' ');
            padded += 1;
        }
    }

    Alignment {
        spelling,
        padded,
        leftover: dense.count(),
    }
}

/// 漢字表記をハングル形に位置合わせします。
///
/// # 例
///
/// ```
/// use hanjadic::aligner::align;
///
/// assert_eq!("歸還 不能 地點", align("歸還不能地點", "귀환 불능 지점"));
/// ```
pub fn align(hanja: &str, hangul: &str) -> String {
    align_with_report(hanja, hangul).spelling
}

/// 区切り文字で漢字表記を分割し、空でない各表記を返します。
pub fn split_alternatives(hanja: &str) -> impl Iterator<Item = &str> {
    hanja
        .split(ALTERNATIVE_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// 漢字表記がハングル形と1文字ずつ対応しているかを検査します。
///
/// 文字数が等しく、空白の位置が一致している必要があります。
pub fn is_aligned(hanja: &str, hangul: &str) -> bool {
    script::char_len(hanja) == script::char_len(hangul)
        && hanja
            .chars()
            .zip(hangul.chars())
            .all(|(h, g)| (h == ' ') == (g == ' '))
}
