//! レコードの分類
//!
//! 品詞テンプレートと見出し語の文字構成から、レコードを次のいずれかに分類します。
//!
//! - 漢字1字の項目（[`Classification::Character`]）
//! - 漢字語（[`Classification::HanjaRootedWord`]）
//! - 固有語（[`Classification::PureNativeWord`]）
//! - 対象外（[`Classification::Skip`]）
//!
//! 分類はレコードを変更しない純粋関数で、カテゴリごとのパスで毎回やり直されます。

use std::fmt;

use crate::record::{HeadTemplate, LexicalRecord};
use crate::script;

/// 認識する品詞テンプレートの種類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Hanja,
    Noun,
    ProperNoun,
    Number,
    Verb,
    VerbSet,
    Adjective,
    Adverb,
    Determiner,
}

impl TemplateKind {
    /// テンプレート名から種類を判定します。認識しない名前には `None` を返します。
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "ko-hanja" | "ko-hanja/new" | "ko-hanja/old" => Self::Hanja,
            "ko-noun" => Self::Noun,
            "ko-proper noun" => Self::ProperNoun,
            "ko-num" => Self::Number,
            "ko-verb" => Self::Verb,
            "ko-verb-set" => Self::VerbSet,
            "ko-adj" | "ko-adjective" => Self::Adjective,
            "ko-adv" | "ko-adverb" => Self::Adverb,
            "ko-determ" | "ko-det" => Self::Determiner,
            _ => return None,
        };
        Some(kind)
    }

    /// 対応する品詞
    pub fn part_of_speech(self) -> PartOfSpeech {
        match self {
            Self::Hanja => PartOfSpeech::Character,
            Self::Noun => PartOfSpeech::Noun,
            Self::ProperNoun => PartOfSpeech::ProperNoun,
            Self::Number => PartOfSpeech::Number,
            Self::Verb | Self::VerbSet => PartOfSpeech::Verb,
            Self::Adjective => PartOfSpeech::Adjective,
            Self::Adverb => PartOfSpeech::Adverb,
            Self::Determiner => PartOfSpeech::Determiner,
        }
    }

    /// 名詞類（名詞・固有名詞・数詞）のテンプレートかどうか
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun | Self::Number)
    }

    /// 用言類（動詞・形容詞・副詞・冠形詞）のテンプレートかどうか
    pub fn is_predicate(self) -> bool {
        matches!(
            self,
            Self::Verb | Self::VerbSet | Self::Adjective | Self::Adverb | Self::Determiner
        )
    }
}

/// 出力スキーマに書き込まれる品詞タグ
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Character,
    Noun,
    ProperNoun,
    Number,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    /// 品詞情報を持たないソース（Kengdic）由来
    Unspecified,
}

impl PartOfSpeech {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Noun => "noun",
            Self::ProperNoun => "proper-noun",
            Self::Number => "number",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Determiner => "determiner",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 対象外とした理由
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// 認識する品詞テンプレートがない
    UnrecognizedTemplate,
    /// 見出し語がラテン文字のみ（外来語のローマ字表記）
    LatinHeadword,
    /// 見出し語にハングルも漢字も含まれない（数字や記号など）
    NoHanjaHeadword,
    /// ハングルの発音が得られない
    NoPronunciation,
    /// 意味が得られない
    NoMeaning,
}

/// 漢字1字項目の1語義分の読みと意味
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterReading {
    pub pronunciations: Vec<String>,
    pub english_meanings: Vec<String>,
    pub korean_meanings: Vec<String>,
    pub glosses: Vec<String>,
}

/// 漢字1字項目の候補
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterCandidate {
    pub character: String,
    pub readings: Vec<CharacterReading>,
}

/// 単語項目の候補
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCandidate {
    pub kind: TemplateKind,
    /// 漢字表記（固有語では `None`）
    pub hanja: Option<String>,
    pub hangul: String,
    pub english_meanings: Vec<String>,
    pub glosses: Vec<String>,
}

impl WordCandidate {
    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.kind.part_of_speech()
    }
}

/// 分類結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Character(CharacterCandidate),
    HanjaRootedWord(WordCandidate),
    PureNativeWord(WordCandidate),
    Skip(SkipReason),
}

impl Classification {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

/// レコードを分類します。
///
/// 認識できる最初の品詞テンプレートで分類します。認識できるテンプレートが1つもなければ
/// [`SkipReason::UnrecognizedTemplate`] になります。
pub fn classify(record: &LexicalRecord) -> Classification {
    record
        .head_templates
        .iter()
        .find_map(|template| classify_template(record, template))
        .unwrap_or(Classification::Skip(SkipReason::UnrecognizedTemplate))
}

/// 1つの品詞テンプレートに基づいてレコードを分類します。
///
/// # 戻り値
///
/// テンプレートを認識しない場合は `None`
pub fn classify_template(record: &LexicalRecord, template: &HeadTemplate) -> Option<Classification> {
    let kind = TemplateKind::from_name(&template.name)?;
    let classification = if kind == TemplateKind::Hanja {
        classify_character(record, template)
    } else {
        classify_word(record, template, kind)
    };
    Some(classification)
}

fn classify_character(record: &LexicalRecord, template: &HeadTemplate) -> Classification {
    let korean_meanings: Vec<String> = template
        .args
        .values()
        .filter(|v| !v.is_empty())
        .cloned()
        .collect();
    let arg_pronunciations = korean_meanings
        .iter()
        .filter(|v| script::single_char(v).is_some());

    let mut readings = vec![];
    let mut reason = SkipReason::NoPronunciation;
    for sense in &record.senses {
        let mut pronunciations: Vec<String> = sense
            .links
            .iter()
            .filter(|link| {
                link.targets_korean_syllable()
                    && link.text() != record.word
                    && script::is_hangul(link.text())
            })
            .map(|link| link.text().to_string())
            .collect();
        for p in arg_pronunciations.clone() {
            if !pronunciations.contains(p) {
                pronunciations.push(p.clone());
            }
        }

        if pronunciations.is_empty() {
            continue;
        }
        if korean_meanings.is_empty() && sense.glosses.is_empty() {
            reason = SkipReason::NoMeaning;
            continue;
        }
        readings.push(CharacterReading {
            pronunciations,
            english_meanings: sense.english_meanings().map(str::to_string).collect(),
            korean_meanings: korean_meanings.clone(),
            glosses: sense.glosses.clone(),
        });
    }

    if readings.is_empty() {
        return Classification::Skip(reason);
    }
    Classification::Character(CharacterCandidate {
        character: record.word.clone(),
        readings,
    })
}

fn classify_word(record: &LexicalRecord, template: &HeadTemplate, kind: TemplateKind) -> Classification {
    let headword = record.word.as_str();

    if script::is_hangul(headword) {
        let candidate = WordCandidate {
            kind,
            hanja: record.hanja_form().map(str::to_string),
            hangul: headword.to_string(),
            english_meanings: record.english_meanings(),
            glosses: record.glosses(),
        };
        return if candidate.hanja.is_some() {
            Classification::HanjaRootedWord(candidate)
        } else {
            Classification::PureNativeWord(candidate)
        };
    }

    if script::is_latin_word(headword) {
        return Classification::Skip(SkipReason::LatinHeadword);
    }
    if !script::is_hanja(headword) {
        return Classification::Skip(SkipReason::NoHanjaHeadword);
    }

    // The headword itself is the Hanja spelling; the Hangul form has to be found elsewhere.
    match hangul_pronunciation(record, template) {
        Some(hangul) => Classification::HanjaRootedWord(WordCandidate {
            kind,
            hanja: Some(headword.to_string()),
            hangul: hangul.to_string(),
            english_meanings: record.english_meanings(),
            glosses: record.glosses(),
        }),
        None => Classification::Skip(SkipReason::NoPronunciation),
    }
}

/// 漢字の見出し語に対するハングルの発音を探します。
fn hangul_pronunciation<'a>(record: &'a LexicalRecord, template: &'a HeadTemplate) -> Option<&'a str> {
    const TAGS: [&str; 2] = ["hangeul", "hangul"];

    let from_args = TAGS
        .iter()
        .filter_map(|key| template.args.get(*key))
        .map(String::as_str);
    let from_forms = record
        .forms
        .iter()
        .filter(|f| TAGS.iter().any(|t| f.has_tag(t)))
        .filter_map(|f| f.form.as_deref());
    let from_links = record
        .senses
        .iter()
        .flat_map(|s| s.links.iter())
        .filter(|link| link.targets_hangul())
        .map(|link| link.text());

    from_args
        .chain(from_forms)
        .chain(from_links)
        .find(|p| script::is_hangul(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LexicalRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_template_kind() {
        assert_eq!(Some(TemplateKind::Hanja), TemplateKind::from_name("ko-hanja/old"));
        assert_eq!(Some(TemplateKind::ProperNoun), TemplateKind::from_name("ko-proper noun"));
        assert_eq!(Some(TemplateKind::Adverb), TemplateKind::from_name("ko-adverb"));
        assert_eq!(None, TemplateKind::from_name("head"));
        assert_eq!(None, TemplateKind::from_name("ko-verb-form"));
        assert_eq!("verb", TemplateKind::VerbSet.part_of_speech().as_str());
        assert!(TemplateKind::Number.is_nominal());
        assert!(TemplateKind::Determiner.is_predicate());
        assert!(!TemplateKind::Hanja.is_nominal());
        assert!(!TemplateKind::Hanja.is_predicate());
    }

    #[test]
    fn test_classify_character() {
        let record = parse(
            r#"{"word":"犬","head_templates":[{"name":"ko-hanja","args":{"1":"개 견"}}],"senses":[{"links":[["Hanja","hanja#English"],["견","견#Korean"],["dog","dog"]],"glosses":["dog"]}]}"#,
        );
        let Classification::Character(candidate) = classify(&record) else {
            panic!("expected a character");
        };
        assert_eq!("犬", candidate.character);
        assert_eq!(1, candidate.readings.len());
        let reading = &candidate.readings[0];
        assert_eq!(vec!["견".to_string()], reading.pronunciations);
        assert_eq!(vec!["dog".to_string()], reading.english_meanings);
        assert_eq!(vec!["개 견".to_string()], reading.korean_meanings);
        assert_eq!(vec!["dog".to_string()], reading.glosses);
    }

    #[test]
    fn test_classify_character_pronunciation_from_args() {
        let record = parse(
            r#"{"word":"樂","head_templates":[{"name":"ko-hanja/new","args":{"1":"락"}}],"senses":[{"glosses":["pleasure"]}]}"#,
        );
        let Classification::Character(candidate) = classify(&record) else {
            panic!("expected a character");
        };
        assert_eq!(vec!["락".to_string()], candidate.readings[0].pronunciations);
    }

    #[test]
    fn test_classify_character_ignores_self_reference() {
        let record = parse(
            r#"{"word":"견","head_templates":[{"name":"ko-hanja","args":{}}],"senses":[{"links":[["견","견#Korean"]],"glosses":["dog"]}]}"#,
        );
        assert_eq!(Classification::Skip(SkipReason::NoPronunciation), classify(&record));
    }

    #[test]
    fn test_classify_character_without_meaning() {
        let record = parse(
            r#"{"word":"犬","head_templates":[{"name":"ko-hanja","args":{}}],"senses":[{"links":[["견","견#Korean"]]}]}"#,
        );
        assert_eq!(Classification::Skip(SkipReason::NoMeaning), classify(&record));
    }

    #[test]
    fn test_classify_character_without_senses() {
        let record = parse(r#"{"word":"犬","head_templates":[{"name":"ko-hanja","args":{"1":"견"}}]}"#);
        assert!(classify(&record).is_skip());
    }

    #[test]
    fn test_classify_hanja_rooted_from_form() {
        let record = parse(
            r#"{"word":"도착","head_templates":[{"name":"ko-noun","args":{}}],"forms":[{"tags":["hanja"],"form":"到着"}],"senses":[{"links":[["arrival","arrival"]],"glosses":["arrival"]}]}"#,
        );
        let Classification::HanjaRootedWord(candidate) = classify(&record) else {
            panic!("expected a hanja-rooted word");
        };
        assert_eq!(Some("到着"), candidate.hanja.as_deref());
        assert_eq!("도착", candidate.hangul);
        assert_eq!(PartOfSpeech::Noun, candidate.part_of_speech());
        assert_eq!(vec!["arrival".to_string()], candidate.english_meanings);
    }

    #[test]
    fn test_classify_hanja_headword() {
        let record = parse(
            r#"{"word":"歸還不能地點","head_templates":[{"name":"ko-noun","args":{"hangeul":"귀환 불능 지점"}}],"senses":[{"glosses":["point of no return"]}]}"#,
        );
        let Classification::HanjaRootedWord(candidate) = classify(&record) else {
            panic!("expected a hanja-rooted word");
        };
        assert_eq!(Some("歸還不能地點"), candidate.hanja.as_deref());
        assert_eq!("귀환 불능 지점", candidate.hangul);
    }

    #[test]
    fn test_classify_hanja_headword_pronunciation_from_links() {
        let record = parse(
            r#"{"word":"學校","head_templates":[{"name":"ko-noun","args":{}}],"senses":[{"links":[["학교","학교#Korean"]],"glosses":["Hanja form of 학교"]}]}"#,
        );
        let Classification::HanjaRootedWord(candidate) = classify(&record) else {
            panic!("expected a hanja-rooted word");
        };
        assert_eq!("학교", candidate.hangul);
    }

    #[test]
    fn test_classify_hanja_headword_without_pronunciation() {
        let record = parse(
            r#"{"word":"學校","head_templates":[{"name":"ko-noun","args":{}}],"senses":[{"glosses":["school"]}]}"#,
        );
        assert_eq!(Classification::Skip(SkipReason::NoPronunciation), classify(&record));
    }

    #[test]
    fn test_classify_native() {
        let record = parse(
            r#"{"word":"나무","head_templates":[{"name":"head","args":{}},{"name":"ko-noun","args":{}}],"senses":[{"links":[["tree","tree"]],"glosses":["tree"]}]}"#,
        );
        let Classification::PureNativeWord(candidate) = classify(&record) else {
            panic!("expected a native word");
        };
        assert_eq!(None, candidate.hanja);
        assert_eq!("나무", candidate.hangul);
    }

    #[test]
    fn test_classify_latin_headword() {
        let record = parse(r#"{"word":"Seoul","head_templates":[{"name":"ko-proper noun","args":{}}]}"#);
        assert_eq!(Classification::Skip(SkipReason::LatinHeadword), classify(&record));
    }

    #[test]
    fn test_classify_symbol_headword() {
        // A Hangul link alone does not make a headword without Hanja a Hanja spelling.
        let record = parse(
            r#"{"word":"100","head_templates":[{"name":"ko-num","args":{"hangeul":"백"}}],"senses":[{"links":[["백","백#Korean"]],"glosses":["hundred"]}]}"#,
        );
        assert_eq!(Classification::Skip(SkipReason::NoHanjaHeadword), classify(&record));
    }

    #[test]
    fn test_classify_unrecognized() {
        let record = parse(r#"{"word":"-다","head_templates":[{"name":"ko-suffix","args":{}}]}"#);
        assert_eq!(Classification::Skip(SkipReason::UnrecognizedTemplate), classify(&record));
        let record = parse(r#"{"word":"나무"}"#);
        assert_eq!(Classification::Skip(SkipReason::UnrecognizedTemplate), classify(&record));
    }
}
