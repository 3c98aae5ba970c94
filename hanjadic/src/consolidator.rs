//! 分類済みの候補の統合
//!
//! このモジュールは、漢字1字の索引と単語の索引を所有する [`Consolidator`] を提供します。
//! パイプラインの各パスは `&mut Consolidator` を通じて候補を登録し、すべてのパスが終わると
//! [`Consolidator::finish`] で不変の [`ConsolidatedLexicon`] に変換され、出力に渡されます。

pub mod character;
pub mod word;

use log::debug;

use crate::classifier::{CharacterCandidate, PartOfSpeech, WordCandidate};
use crate::script;

pub use crate::consolidator::character::{CharacterIndex, HanjaCharacterEntry};
pub use crate::consolidator::word::{KoreanWordEntry, UpsertReport, WordIndex};

/// 索引を所有し、候補を統合するサービス
#[derive(Debug, Default)]
pub struct Consolidator {
    characters: CharacterIndex,
    hanja_rooted: WordIndex,
    native_nouns: WordIndex,
    native_predicates: WordIndex,
}

impl Consolidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 漢字1字の候補を読みごとに登録します。
    ///
    /// # 戻り値
    ///
    /// 意味を追加した読みの数
    pub fn add_character(&mut self, candidate: &CharacterCandidate) -> usize {
        candidate
            .readings
            .iter()
            .map(|r| {
                self.characters.add(
                    &candidate.character,
                    &r.pronunciations,
                    &r.english_meanings,
                    &r.korean_meanings,
                    &r.glosses,
                )
            })
            .sum()
    }

    /// 漢字語を登録します。
    pub fn upsert_hanja_rooted(&mut self, hanja: &str, candidate: &WordCandidate) -> UpsertReport {
        self.upsert_hanja_rooted_as(hanja, &candidate.hangul, candidate)
    }

    /// ハングル形を指定して漢字語を登録します。語尾を除去した形を登録するときに使います。
    pub fn upsert_hanja_rooted_as(
        &mut self,
        hanja: &str,
        hangul: &str,
        candidate: &WordCandidate,
    ) -> UpsertReport {
        self.hanja_rooted.upsert(
            Some(hanja),
            hangul,
            &candidate.english_meanings,
            &candidate.glosses,
            candidate.part_of_speech(),
        )
    }

    /// 1字の漢字語から、まだ索引にない漢字の読みを補います。
    ///
    /// 漢字表記が漢字1字で、ハングル形が1音節の場合に限ります。ハングル形を読みと
    /// 韓国語の意味の両方として登録します。
    ///
    /// # 戻り値
    ///
    /// 漢字を新たに登録した場合は `true`
    pub fn supplement_character(&mut self, hanja: &str, candidate: &WordCandidate) -> bool {
        let Some(c) = script::single_char(hanja) else {
            return false;
        };
        if self.characters.contains(c) || script::single_char(&candidate.hangul).is_none() {
            return false;
        }
        let hangul = std::slice::from_ref(&candidate.hangul);
        self.characters.add(
            hanja,
            hangul,
            &candidate.english_meanings,
            hangul,
            &candidate.glosses,
        ) > 0
    }

    /// 漢字1字の読みを直接登録します。
    pub fn add_character_reading(
        &mut self,
        hanja: &str,
        pronunciation: &str,
        english: &[String],
    ) -> usize {
        self.characters
            .add(hanja, &[pronunciation.to_string()], english, &[], &[])
    }

    /// 品詞情報を持たない単語を登録します（漢字表記があれば漢字語、なければ固有語として）。
    pub fn upsert_unspecified(
        &mut self,
        hanja: Option<&str>,
        hangul: &str,
        english: &[String],
    ) -> UpsertReport {
        let pos = PartOfSpeech::Unspecified;
        match hanja {
            Some(_) => self.hanja_rooted.upsert(hanja, hangul, english, &[], pos),
            None => self.native_nouns.upsert(None, hangul, english, &[], pos),
        }
    }

    /// 固有語の名詞類を登録します。
    ///
    /// `deduplicate` が `true` の場合、漢字語の索引に既にあるハングル形は登録しません。
    ///
    /// # 戻り値
    ///
    /// 重複として捨てた場合は `None`
    pub fn admit_native_noun(
        &mut self,
        candidate: &WordCandidate,
        deduplicate: bool,
    ) -> Option<UpsertReport> {
        if deduplicate && self.is_hanja_rooted(&candidate.hangul) {
            debug!("Dropped native noun {:?}: already Hanja-rooted", candidate.hangul);
            return None;
        }
        Some(Self::upsert_native(&mut self.native_nouns, candidate))
    }

    /// 固有語の用言類を登録します。
    ///
    /// 漢字語の索引に既にあるハングル形（語尾除去後の一致を含む）は重複として登録しません。
    ///
    /// # 戻り値
    ///
    /// 重複として捨てた場合は `None`
    pub fn admit_native_predicate(&mut self, candidate: &WordCandidate) -> Option<UpsertReport> {
        if self.is_hanja_rooted(&candidate.hangul) {
            debug!("Dropped native predicate {:?}: already Hanja-rooted", candidate.hangul);
            return None;
        }
        Some(Self::upsert_native(&mut self.native_predicates, candidate))
    }

    fn upsert_native(index: &mut WordIndex, candidate: &WordCandidate) -> UpsertReport {
        index.upsert(
            None,
            &candidate.hangul,
            &candidate.english_meanings,
            &candidate.glosses,
            candidate.part_of_speech(),
        )
    }

    /// ハングル形が漢字語の索引に既に含まれているかどうか
    ///
    /// 入力そのものと語尾を除去した形の両方で比較します。
    pub fn is_hanja_rooted(&self, hangul: &str) -> bool {
        self.hanja_rooted.contains_hangul(hangul)
    }

    pub fn characters(&self) -> &CharacterIndex {
        &self.characters
    }

    pub fn hanja_rooted(&self) -> &WordIndex {
        &self.hanja_rooted
    }

    pub fn native_nouns(&self) -> &WordIndex {
        &self.native_nouns
    }

    pub fn native_predicates(&self) -> &WordIndex {
        &self.native_predicates
    }

    /// 統合を終了し、不変の結果を返します。
    pub fn finish(self) -> ConsolidatedLexicon {
        ConsolidatedLexicon {
            characters: self.characters,
            hanja_rooted: self.hanja_rooted,
            native_nouns: self.native_nouns,
            native_predicates: self.native_predicates,
        }
    }
}

/// すべてのパスを終えた索引の集合
///
/// 出力（SQL）に渡される不変の結果です。
#[derive(Debug, Default)]
pub struct ConsolidatedLexicon {
    pub characters: CharacterIndex,
    pub hanja_rooted: WordIndex,
    pub native_nouns: WordIndex,
    pub native_predicates: WordIndex,
}

impl ConsolidatedLexicon {
    /// 単語の索引を出力順（漢字語、固有語の用言類、固有語の名詞類）に返します。
    pub fn word_indices(&self) -> [&WordIndex; 3] {
        [&self.hanja_rooted, &self.native_predicates, &self.native_nouns]
    }

    /// 単語の総数
    pub fn num_words(&self) -> usize {
        self.word_indices().iter().map(|w| w.len()).sum()
    }
}
