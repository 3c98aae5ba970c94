//! 漢字1字の読みと意味の索引

use std::collections::BTreeSet;

use hashbrown::HashMap;
use log::warn;

use crate::script;

/// ある漢字のある読みに集約された意味の集合
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HanjaCharacterEntry {
    pub english_meanings: BTreeSet<String>,
    pub korean_meanings: BTreeSet<String>,
    pub glosses: BTreeSet<String>,
}

impl HanjaCharacterEntry {
    fn absorb(&mut self, english: &[String], korean: &[String], glosses: &[String]) {
        self.english_meanings.extend(english.iter().cloned());
        self.korean_meanings.extend(korean.iter().cloned());
        self.glosses.extend(glosses.iter().cloned());
    }
}

/// 漢字 → 読み（ハングル1音節） → [`HanjaCharacterEntry`] の2段の索引
///
/// キーを `char` とすることで、外側が漢字1字、内側がハングル1音節であることを型で保証します。
/// 同じ漢字に異なる読みが複数ある場合（多音字）、読みごとに別の項目になります。
#[derive(Clone, Debug, Default)]
pub struct CharacterIndex {
    entries: HashMap<char, HashMap<char, HanjaCharacterEntry>>,
}

impl CharacterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 漢字の読みごとに意味を和集合で追加します。
    ///
    /// 読みの項目は初出時に作成されます。漢字が1字でない場合、また読みがハングル1音節でない
    /// 場合は、その寄与を捨てて警告を出します。
    ///
    /// # 引数
    ///
    /// * `character` - 漢字1字
    /// * `pronunciations` - ハングルの読み
    /// * `english` - 英語の意味
    /// * `korean` - 韓国語の意味
    /// * `glosses` - 語釈
    ///
    /// # 戻り値
    ///
    /// 意味を追加した読みの数
    pub fn add(
        &mut self,
        character: &str,
        pronunciations: &[String],
        english: &[String],
        korean: &[String],
        glosses: &[String],
    ) -> usize {
        let Some(hanja) = script::single_char(character).filter(|&c| script::is_hanja_char(c)) else {
            warn!("Rejected character entry {character:?}: not a single Hanja character");
            return 0;
        };

        let mut added = 0;
        for pronunciation in pronunciations {
            let Some(hangul) =
                script::single_char(pronunciation).filter(|&c| script::is_hangul_syllable(c))
            else {
                warn!(
                    "Rejected pronunciation {pronunciation:?} of {character:?}: not a single Hangul syllable"
                );
                continue;
            };
            self.entries
                .entry(hanja)
                .or_default()
                .entry(hangul)
                .or_default()
                .absorb(english, korean, glosses);
            added += 1;
        }
        added
    }

    /// 漢字が索引に含まれているかどうか
    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    /// 漢字と読みに対応する項目を取得します。
    pub fn get(&self, character: char, pronunciation: char) -> Option<&HanjaCharacterEntry> {
        self.entries.get(&character)?.get(&pronunciation)
    }

    /// 登録された漢字の数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 読みの項目の総数
    pub fn num_readings(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// `(漢字, 読み, 項目)` を漢字・読みの順にソートして返します。
    pub fn sorted(&self) -> Vec<(char, char, &HanjaCharacterEntry)> {
        let mut rows: Vec<_> = self
            .entries
            .iter()
            .flat_map(|(&hanja, readings)| {
                readings
                    .iter()
                    .map(move |(&hangul, entry)| (hanja, hangul, entry))
            })
            .collect();
        rows.sort_unstable_by_key(|&(hanja, hangul, _)| (hanja, hangul));
        rows
    }
}
