//! 単語の索引

use std::collections::BTreeSet;
use std::ops::AddAssign;

use hashbrown::HashMap;
use log::warn;

use crate::aligner;
use crate::classifier::PartOfSpeech;
use crate::suffix;

/// 1つの語彙項目
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KoreanWordEntry {
    /// ハングル形
    pub hangul: String,

    /// 漢字表記。固有語では `None`。存在する場合、文字数は `hangul` と等しくなります。
    pub hanja: Option<String>,

    pub english_meanings: BTreeSet<String>,
    pub glosses: BTreeSet<String>,

    /// 最初に登録されたときの品詞
    pub part_of_speech: PartOfSpeech,
}

/// 1回の登録で起きたことの集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpsertReport {
    /// 新しく作成した項目の数
    pub inserted: usize,
    /// 既存の項目に意味を統合した数
    pub merged: usize,
    /// 位置合わせに失敗して捨てた候補の数
    pub rejected: usize,
}

impl UpsertReport {
    /// 1件以上の項目を作成または更新したかどうか
    pub fn is_stored(&self) -> bool {
        self.inserted + self.merged > 0
    }
}

impl AddAssign for UpsertReport {
    fn add_assign(&mut self, rhs: Self) {
        self.inserted += rhs.inserted;
        self.merged += rhs.merged;
        self.rejected += rhs.rejected;
    }
}

/// 漢字表記（または `None`） → ハングル形 → [`KoreanWordEntry`] の2段の索引
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    entries: HashMap<Option<String>, HashMap<String, KoreanWordEntry>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 語彙項目を登録または統合します。
    ///
    /// 漢字表記がある場合は [`ALTERNATIVE_DELIMITER`](aligner::ALTERNATIVE_DELIMITER) で分割し、
    /// 各表記をハングル形に位置合わせしてから登録します。過不足なく対応しない表記は
    /// 切り詰めずに捨て、警告を出します。
    ///
    /// 同じ `(漢字表記, ハングル形)` の項目が既にあれば意味と語釈を和集合で統合します。
    ///
    /// # 引数
    ///
    /// * `hanja` - 漢字表記
    /// * `hangul` - ハングル形
    /// * `english` - 英語の意味
    /// * `glosses` - 語釈
    /// * `part_of_speech` - 品詞（新規作成時のみ使われます）
    pub fn upsert(
        &mut self,
        hanja: Option<&str>,
        hangul: &str,
        english: &[String],
        glosses: &[String],
        part_of_speech: PartOfSpeech,
    ) -> UpsertReport {
        let mut report = UpsertReport::default();

        if hangul.trim().is_empty() {
            warn!("Rejected an entry with an empty Hangul form (hanja={hanja:?})");
            report.rejected += 1;
            return report;
        }

        let Some(hanja) = hanja else {
            self.store(None, hangul, english, glosses, part_of_speech, &mut report);
            return report;
        };

        let mut any = false;
        for alternative in aligner::split_alternatives(hanja) {
            any = true;
            let alignment = aligner::align_with_report(alternative, hangul);
            if !alignment.is_exact() || !aligner::is_aligned(&alignment.spelling, hangul) {
                warn!(
                    "Rejected hanja={alternative:?} for hangul={hangul:?}: \
                    {} position(s) unmapped, {} character(s) left over",
                    alignment.padded, alignment.leftover,
                );
                report.rejected += 1;
                continue;
            }
            self.store(
                Some(alignment.spelling),
                hangul,
                english,
                glosses,
                part_of_speech,
                &mut report,
            );
        }
        if !any {
            warn!("Rejected an empty Hanja spelling {hanja:?} for hangul={hangul:?}");
            report.rejected += 1;
        }
        report
    }

    fn store(
        &mut self,
        hanja: Option<String>,
        hangul: &str,
        english: &[String],
        glosses: &[String],
        part_of_speech: PartOfSpeech,
        report: &mut UpsertReport,
    ) {
        let by_hangul = self.entries.entry(hanja.clone()).or_default();
        if let Some(entry) = by_hangul.get_mut(hangul) {
            entry.english_meanings.extend(english.iter().cloned());
            entry.glosses.extend(glosses.iter().cloned());
            report.merged += 1;
        } else {
            by_hangul.insert(
                hangul.to_string(),
                KoreanWordEntry {
                    hangul: hangul.to_string(),
                    hanja,
                    english_meanings: english.iter().cloned().collect(),
                    glosses: glosses.iter().cloned().collect(),
                    part_of_speech,
                },
            );
            report.inserted += 1;
        }
    }

    /// 項目を取得します。
    pub fn get(&self, hanja: Option<&str>, hangul: &str) -> Option<&KoreanWordEntry> {
        self.entries
            .get(&hanja.map(str::to_string))?
            .get(hangul)
    }

    /// ハングル形がこの索引に既に含まれているかを調べます。
    ///
    /// 索引中のすべてのハングル形を線形に走査し、入力そのもの、または語尾を除去した入力と
    /// 一致するものがあれば `true` を返します。
    pub fn contains_hangul(&self, hangul: &str) -> bool {
        let stripped = suffix::strip_inflection(hangul);
        self.entries
            .values()
            .flat_map(HashMap::keys)
            .any(|known| known == hangul || known == stripped)
    }

    /// 項目の総数
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 全項目を返します（順序は不定）。
    pub fn iter(&self) -> impl Iterator<Item = &KoreanWordEntry> + '_ {
        self.entries.values().flat_map(HashMap::values)
    }

    /// 全項目を `(漢字表記, ハングル形)` の順にソートして返します。固有語が先に並びます。
    pub fn sorted(&self) -> Vec<&KoreanWordEntry> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| (&a.hanja, &a.hangul).cmp(&(&b.hanja, &b.hangul)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_then_merge() {
        let mut index = WordIndex::new();
        let report = index.upsert(
            Some("到着"),
            "도착",
            &strings(&["arrival"]),
            &[],
            PartOfSpeech::Noun,
        );
        assert_eq!(UpsertReport { inserted: 1, merged: 0, rejected: 0 }, report);

        let report = index.upsert(
            Some("到着"),
            "도착",
            &strings(&["arrival", "reaching"]),
            &strings(&["arrival"]),
            PartOfSpeech::Verb,
        );
        assert_eq!(UpsertReport { inserted: 0, merged: 1, rejected: 0 }, report);

        assert_eq!(1, index.len());
        let entry = index.get(Some("到着"), "도착").unwrap();
        assert_eq!(2, entry.english_meanings.len());
        assert_eq!(1, entry.glosses.len());
        assert_eq!(PartOfSpeech::Noun, entry.part_of_speech);
    }

    #[test]
    fn test_order_independent() {
        let a = strings(&["tree", "wood"]);
        let b = strings(&["timber", "tree"]);

        let mut first = WordIndex::new();
        first.upsert(None, "나무", &a, &strings(&["a tree"]), PartOfSpeech::Noun);
        first.upsert(None, "나무", &b, &[], PartOfSpeech::Noun);

        let mut second = WordIndex::new();
        second.upsert(None, "나무", &b, &[], PartOfSpeech::Noun);
        second.upsert(None, "나무", &a, &strings(&["a tree"]), PartOfSpeech::Noun);

        assert_eq!(first.get(None, "나무"), second.get(None, "나무"));
    }

    #[test]
    fn test_alignment_with_spaces() {
        let mut index = WordIndex::new();
        let report = index.upsert(
            Some("歸還不能地點"),
            "귀환 불능 지점",
            &[],
            &strings(&["point of no return"]),
            PartOfSpeech::Noun,
        );
        assert!(report.is_stored());
        assert!(index.get(Some("歸還 不能 地點"), "귀환 불능 지점").is_some());
        assert!(index.get(Some("歸還不能地點"), "귀환 불능 지점").is_none());
    }

    #[test]
    fn test_alternatives() {
        let mut index = WordIndex::new();
        let report = index.upsert(
            Some("元來／原來"),
            "원래",
            &strings(&["originally"]),
            &[],
            PartOfSpeech::Adverb,
        );
        assert_eq!(2, report.inserted);
        assert!(index.get(Some("元來"), "원래").is_some());
        assert!(index.get(Some("原來"), "원래").is_some());
    }

    #[test]
    fn test_reject_length_mismatch() {
        let mut index = WordIndex::new();
        let report = index.upsert(Some("到着地"), "도착", &[], &[], PartOfSpeech::Noun);
        assert_eq!(UpsertReport { inserted: 0, merged: 0, rejected: 1 }, report);
        let report = index.upsert(Some("到"), "도착", &[], &[], PartOfSpeech::Noun);
        assert_eq!(1, report.rejected);
        assert!(index.is_empty());

        // One good and one bad alternative.
        let report = index.upsert(Some("到着／到"), "도착", &[], &[], PartOfSpeech::Noun);
        assert_eq!(UpsertReport { inserted: 1, merged: 0, rejected: 1 }, report);
    }

    #[test]
    fn test_reject_empty() {
        let mut index = WordIndex::new();
        assert_eq!(1, index.upsert(None, "", &[], &[], PartOfSpeech::Noun).rejected);
        assert_eq!(1, index.upsert(Some("／"), "도착", &[], &[], PartOfSpeech::Noun).rejected);
        assert!(index.is_empty());
    }

    #[test]
    fn test_length_invariant() {
        let mut index = WordIndex::new();
        index.upsert(Some("歸還不能地點"), "귀환 불능 지점", &[], &[], PartOfSpeech::Noun);
        index.upsert(Some("到着"), "도착", &[], &[], PartOfSpeech::Noun);
        index.upsert(Some("到着地"), "도착", &[], &[], PartOfSpeech::Noun);
        index.upsert(Some("學"), "학교", &[], &[], PartOfSpeech::Noun);
        index.upsert(None, "나무", &[], &[], PartOfSpeech::Noun);

        assert_eq!(3, index.len());
        for entry in index.iter() {
            if let Some(hanja) = &entry.hanja {
                assert_eq!(script::char_len(hanja), script::char_len(&entry.hangul));
            }
        }
    }

    #[test]
    fn test_contains_hangul() {
        let mut index = WordIndex::new();
        index.upsert(Some("到着"), "도착", &[], &[], PartOfSpeech::Verb);
        assert!(index.contains_hangul("도착"));
        assert!(index.contains_hangul("도착하다"));
        assert!(!index.contains_hangul("도착지"));
        assert!(!index.contains_hangul("나무"));
    }

    #[test]
    fn test_sorted() {
        let mut index = WordIndex::new();
        index.upsert(Some("學校"), "학교", &[], &[], PartOfSpeech::Noun);
        index.upsert(None, "나무", &[], &[], PartOfSpeech::Noun);
        index.upsert(Some("到着"), "도착", &[], &[], PartOfSpeech::Noun);
        let keys: Vec<_> = index
            .sorted()
            .into_iter()
            .map(|e| e.hangul.as_str())
            .collect();
        assert_eq!(vec!["나무", "도착", "학교"], keys);
    }
}
