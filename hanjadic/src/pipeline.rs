//! カテゴリごとのパスによる語彙の構築
//!
//! 入力全体を5回走査し、毎回1つの語彙カテゴリだけを索引に取り込みます。
//! 重複除去は前のパスで完成した索引を参照するため、パスの順序は固定です。

use std::fmt;

use log::{debug, info};

use crate::aligner;
use crate::classifier::{self, Classification, WordCandidate};
use crate::consolidator::{ConsolidatedLexicon, Consolidator, UpsertReport};
use crate::errors::Result;
use crate::source::{self, RecordSource};
use crate::suffix;

/// 語彙カテゴリ（パスの単位）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexicalCategory {
    Characters,
    HanjaRootedNouns,
    PureNativeNouns,
    HanjaRootedPredicates,
    PureNativePredicates,
}

impl LexicalCategory {
    /// 実行順のすべてのカテゴリ
    pub const ALL: [Self; 5] = [
        Self::Characters,
        Self::HanjaRootedNouns,
        Self::PureNativeNouns,
        Self::HanjaRootedPredicates,
        Self::PureNativePredicates,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::HanjaRootedNouns => "hanja-rooted nouns",
            Self::PureNativeNouns => "pure-native nouns",
            Self::HanjaRootedPredicates => "hanja-rooted predicates",
            Self::PureNativePredicates => "pure-native predicates",
        }
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// パイプラインの設定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// 本処理の前に全レコードを一度解析し、不正な入力を早期に検出するかどうか
    pub validate_source: bool,

    /// 漢字語の索引に同じハングル形がある固有語の名詞類も残すかどうか
    ///
    /// 既定では名詞類も用言類も照合して重複を除きます。用言類は常に照合されます。
    pub keep_native_homonyms: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            validate_source: true,
            keep_native_homonyms: false,
        }
    }
}

/// 1回のパスの集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// 読んだレコード数
    pub records: usize,
    /// このカテゴリとして受理した候補の数
    pub accepted: usize,
    /// 分類でSkipになった候補の数
    pub skipped: usize,
    /// 重複として捨てた候補の数
    pub duplicates: usize,
    /// 索引への登録の集計（漢字1字の場合は `inserted` に読みの数を数えます）
    pub upserts: UpsertReport,
}

/// 語彙を構築するパイプライン
pub struct Pipeline<S> {
    source: S,
    config: PipelineConfig,
    consolidator: Consolidator,
}

impl<S> Pipeline<S>
where
    S: RecordSource,
{
    /// 既定の設定でパイプラインを作成します。
    pub fn new(source: S) -> Self {
        Self::with_config(source, PipelineConfig::default())
    }

    pub fn with_config(source: S, config: PipelineConfig) -> Self {
        Self {
            source,
            config,
            consolidator: Consolidator::new(),
        }
    }

    pub fn consolidator(&self) -> &Consolidator {
        &self.consolidator
    }

    /// すべてのパスを順に実行し、統合された語彙を返します。
    ///
    /// # エラー
    ///
    /// 入力を読めない場合、または解析できないレコードがある場合はエラーを返します。
    pub fn run(mut self) -> Result<ConsolidatedLexicon> {
        if self.config.validate_source {
            source::validate(&self.source)?;
        }
        for category in LexicalCategory::ALL {
            self.run_pass(category)?;
        }
        let lexicon = self.consolidator.finish();
        info!(
            "Consolidated {} characters and {} words",
            lexicon.characters.len(),
            lexicon.num_words()
        );
        Ok(lexicon)
    }

    /// 1つのカテゴリについて入力全体を走査します。
    ///
    /// カテゴリは [`LexicalCategory::ALL`] の順に実行する必要があります。
    pub fn run_pass(&mut self, category: LexicalCategory) -> Result<PassStats> {
        info!("Pass: {category}");
        let mut stats = PassStats::default();
        let mut admission = Admission {
            consolidator: &mut self.consolidator,
            config: &self.config,
            stats: &mut stats,
        };
        for record in self.source.records()? {
            let record = record?;
            admission.stats.records += 1;
            for template in &record.head_templates {
                let Some(classification) = classifier::classify_template(&record, template) else {
                    continue;
                };
                admission.admit(category, classification, &record.word);
            }
        }
        info!(
            "Pass {category}: {} records, {} accepted, {} skipped, {} duplicates, \
            {} inserted, {} merged, {} rejected",
            stats.records,
            stats.accepted,
            stats.skipped,
            stats.duplicates,
            stats.upserts.inserted,
            stats.upserts.merged,
            stats.upserts.rejected,
        );
        Ok(stats)
    }
}

/// 1回のパスの間、分類結果を索引に取り込む
struct Admission<'a> {
    consolidator: &'a mut Consolidator,
    config: &'a PipelineConfig,
    stats: &'a mut PassStats,
}

impl Admission<'_> {
    fn admit(&mut self, category: LexicalCategory, classification: Classification, word: &str) {
        use LexicalCategory::*;

        let stats = &mut *self.stats;
        match (category, classification) {
            (Characters, Classification::Character(candidate)) => {
                stats.accepted += 1;
                stats.upserts.inserted += self.consolidator.add_character(&candidate);
            }
            (HanjaRootedNouns, Classification::HanjaRootedWord(candidate))
                if candidate.kind.is_nominal() =>
            {
                stats.accepted += 1;
                stats.upserts += admit_hanja_rooted_noun(self.consolidator, &candidate);
            }
            (PureNativeNouns, Classification::PureNativeWord(candidate))
                if candidate.kind.is_nominal() =>
            {
                stats.accepted += 1;
                let deduplicate = !self.config.keep_native_homonyms;
                match self.consolidator.admit_native_noun(&candidate, deduplicate) {
                    Some(report) => stats.upserts += report,
                    None => stats.duplicates += 1,
                }
            }
            (HanjaRootedPredicates, Classification::HanjaRootedWord(candidate))
                if candidate.kind.is_predicate() =>
            {
                stats.accepted += 1;
                stats.upserts += admit_hanja_rooted_predicate(self.consolidator, &candidate);
            }
            (PureNativePredicates, Classification::PureNativeWord(candidate))
                if candidate.kind.is_predicate() =>
            {
                stats.accepted += 1;
                match self.consolidator.admit_native_predicate(&candidate) {
                    Some(report) => stats.upserts += report,
                    None => stats.duplicates += 1,
                }
            }
            (Characters, Classification::Skip(reason)) => {
                // Skips are the same in every pass, so count them once.
                stats.skipped += 1;
                debug!("Skipped {word:?}: {reason:?}");
            }
            _ => {}
        }
    }
}

fn admit_hanja_rooted_noun(consolidator: &mut Consolidator, candidate: &WordCandidate) -> UpsertReport {
    let Some(hanja) = candidate.hanja.as_deref() else {
        return UpsertReport::default();
    };
    consolidator.supplement_character(hanja, candidate);
    consolidator.upsert_hanja_rooted(hanja, candidate)
}

/// 漢字表記とハングル形の両方から語尾を除去してから登録します。
///
/// 漢字表記に `／` 区切りの異表記がある場合は、表記ごとに語尾を除去します。
fn admit_hanja_rooted_predicate(
    consolidator: &mut Consolidator,
    candidate: &WordCandidate,
) -> UpsertReport {
    let Some(hanja) = candidate.hanja.as_deref() else {
        return UpsertReport::default();
    };
    let stripped: Vec<&str> = aligner::split_alternatives(hanja)
        .map(suffix::strip_inflection)
        .collect();
    let hanja = stripped.join(&aligner::ALTERNATIVE_DELIMITER.to_string());
    let hangul = suffix::strip_inflection(&candidate.hangul);

    if let Some(spellings) = suffix::hanja_override(hangul) {
        let mut report = UpsertReport::default();
        for spelling in spellings {
            report += consolidator.upsert_hanja_rooted_as(spelling, hangul, candidate);
        }
        return report;
    }
    consolidator.upsert_hanja_rooted_as(&hanja, hangul, candidate)
}
