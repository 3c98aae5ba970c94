//! 辞書ダンプの1レコードの表現
//!
//! Wiktionaryから抽出されたJSON Lines形式のダンプ（kaikki.org形式）の1行を表します。
//! スキーマは緩く、ほとんどのフィールドは欠落し得るため、すべて既定値を持ちます。
//! 未知のフィールドは無視されます。

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::script;

/// リンクのターゲットが韓国語の項目を指すことを示す接尾辞
pub const KOREAN_TARGET_SUFFIX: &str = "#Korean";

/// 見出し語1件分のレコード
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalRecord {
    /// 見出し語
    pub word: String,

    /// 品詞テンプレートのリスト
    #[serde(default)]
    pub head_templates: Vec<HeadTemplate>,

    /// 文法形式のリスト
    #[serde(default)]
    pub forms: Vec<Form>,

    /// 語義のリスト
    #[serde(default)]
    pub senses: Vec<Sense>,
}

/// 品詞テンプレート
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTemplate {
    /// テンプレート名（例: `ko-noun`）
    pub name: String,

    /// キー付き引数
    #[serde(default)]
    pub args: HashMap<String, String>,
}

/// 文法形式（タグ集合と表層形）
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub form: Option<String>,
}

impl Form {
    /// 指定したタグを持つかどうか
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// 語義
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub links: Vec<Link>,

    #[serde(default)]
    pub glosses: Vec<String>,
}

/// `[text, target]` 形式の相互参照リンク
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link(pub String, pub String);

impl Link {
    /// リンクの表示テキスト
    pub fn text(&self) -> &str {
        &self.0
    }

    /// リンクのターゲット
    pub fn target(&self) -> &str {
        &self.1
    }

    /// テキストとターゲットの両方が字母のみで構成されていれば、テキストを英語の意味として返します。
    pub fn english_meaning(&self) -> Option<&str> {
        (script::is_alphabetic_word(self.text()) && script::is_alphabetic_word(self.target()))
            .then(|| self.text())
    }

    /// ターゲットが `X#Korean`（Xは1文字）の形であるかどうか
    pub fn targets_korean_syllable(&self) -> bool {
        self.target()
            .strip_suffix(KOREAN_TARGET_SUFFIX)
            .and_then(script::single_char)
            .is_some()
    }

    /// ターゲットから `#Korean` を除いた部分がハングルを含むかどうか
    pub fn targets_hangul(&self) -> bool {
        let target = self
            .target()
            .strip_suffix(KOREAN_TARGET_SUFFIX)
            .unwrap_or_else(|| self.target());
        script::is_hangul(target)
    }
}

impl Sense {
    /// この語義のリンクから英語の意味を抽出します。
    pub fn english_meanings(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.iter().filter_map(Link::english_meaning)
    }
}

impl LexicalRecord {
    /// すべての語義から英語の意味を抽出します。
    pub fn english_meanings(&self) -> Vec<String> {
        self.senses
            .iter()
            .flat_map(Sense::english_meanings)
            .map(str::to_string)
            .collect()
    }

    /// すべての語義の語釈を連結して返します。
    pub fn glosses(&self) -> Vec<String> {
        self.senses
            .iter()
            .flat_map(|s| s.glosses.iter().cloned())
            .collect()
    }

    /// 指定したタグを持つ最後の文法形式の表層形を返します。
    ///
    /// ダンプでは同じタグの形式が複数並ぶことがあり、後のものが優先されます。
    pub fn tagged_form(&self, tag: &str) -> Option<&str> {
        self.forms
            .iter()
            .filter(|f| f.has_tag(tag))
            .filter_map(|f| f.form.as_deref())
            .last()
    }

    /// 漢字表記の文法形式（`hanja` タグ）を返します。
    pub fn hanja_form(&self) -> Option<&str> {
        self.tagged_form("hanja")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOG: &str = r#"{"word":"犬","lang":"Korean","head_templates":[{"name":"ko-hanja","args":{"1":"개","2":"견"}}],"senses":[{"links":[["Hanja","hanja#English"],["견","견#Korean"],["dog","dog"]],"glosses":["dog"]}]}"#;

    #[test]
    fn test_deserialize_record() {
        let record: LexicalRecord = serde_json::from_str(DOG).unwrap();
        assert_eq!("犬", record.word);
        assert_eq!(1, record.head_templates.len());
        assert_eq!("ko-hanja", record.head_templates[0].name);
        assert_eq!(Some("견"), record.head_templates[0].args.get("2").map(String::as_str));
        assert!(record.forms.is_empty());
        assert_eq!(1, record.senses.len());
        assert_eq!(3, record.senses[0].links.len());
        assert_eq!(&["dog".to_string()], record.senses[0].glosses.as_slice());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let record: LexicalRecord = serde_json::from_str(r#"{"word":"나무"}"#).unwrap();
        assert_eq!("나무", record.word);
        assert!(record.head_templates.is_empty());
        assert!(record.senses.is_empty());
        assert!(record.english_meanings().is_empty());
        assert!(record.glosses().is_empty());
    }

    #[test]
    fn test_english_meanings() {
        let record: LexicalRecord = serde_json::from_str(DOG).unwrap();
        assert_eq!(vec!["dog".to_string()], record.english_meanings());
    }

    #[test]
    fn test_link_targets() {
        let link = Link("견".into(), "견#Korean".into());
        assert!(link.targets_korean_syllable());
        assert!(link.targets_hangul());

        let link = Link("개견".into(), "개견#Korean".into());
        assert!(!link.targets_korean_syllable());
        assert!(link.targets_hangul());

        let link = Link("dog".into(), "dog".into());
        assert!(!link.targets_korean_syllable());
        assert!(!link.targets_hangul());
    }

    #[test]
    fn test_tagged_form() {
        let record: LexicalRecord = serde_json::from_str(
            r#"{"word":"도착","forms":[{"tags":["romanization"],"form":"dochak"},{"tags":["hanja"],"form":"到着"},{"tags":["hanja"]}]}"#,
        )
        .unwrap();
        assert_eq!(Some("到着"), record.hanja_form());
        assert_eq!(Some("dochak"), record.tagged_form("romanization"));
        assert_eq!(None, record.tagged_form("hangeul"));
    }
}
