//! タブ区切りの韓英辞書（Kengdic）の読み込み
//!
//! 1行目はヘッダーとして読み飛ばします。各行は少なくとも
//! `番号, 韓国語, 漢字, 英語` の4列を持ちます。漢字の列はカンマ区切りで複数の表記を持つことがあります。

use std::io::{BufRead, BufReader, Read};

use log::{info, warn};

use crate::consolidator::{ConsolidatedLexicon, Consolidator};
use crate::errors::{LexiconError, Result};
use crate::script;
use crate::utils::parse_tsv_row;

const NUM_REQUIRED_COLUMNS: usize = 4;

/// 1行分の語彙項目
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KengdicRow {
    pub korean: String,
    pub hanja: Vec<String>,
    pub english: String,
}

impl KengdicRow {
    /// 1行を解析します。
    ///
    /// 韓国語または英語の列が空の行は `None` になります。韓国語の列からはアポストロフィを取り除きます。
    ///
    /// # エラー
    ///
    /// 列が4つ未満の場合は [`LexiconError::InvalidFormat`] を返します。
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let fields = parse_tsv_row(line)?;
        if fields.len() < NUM_REQUIRED_COLUMNS {
            return Err(LexiconError::invalid_format(
                "kengdic",
                format!(
                    "A row must have at least {NUM_REQUIRED_COLUMNS} columns, but got {}: {line}",
                    fields.len()
                ),
            ));
        }
        let korean = fields[1].replace('\'', "");
        let english = fields[3].trim();
        if korean.is_empty() || english.is_empty() {
            return Ok(None);
        }
        let hanja = fields[2]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Some(Self {
            korean,
            hanja,
            english: english.to_string(),
        }))
    }
}

/// 読み込みの集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KengdicStats {
    /// ヘッダーを除く行数
    pub rows: usize,
    pub with_hanja: usize,
    pub without_hanja: usize,
    /// 追加した漢字の読みの数
    pub character_definitions: usize,
}

/// Kengdicの内容を統合します。
///
/// # 引数
///
/// * `rdr` - タブ区切りのテキストを読むリーダー
///
/// # 戻り値
///
/// 統合された語彙と集計
///
/// # エラー
///
/// 読み込みに失敗した場合、または列の足りない行がある場合はエラーを返します。
pub fn consolidate<R>(rdr: R) -> Result<(ConsolidatedLexicon, KengdicStats)>
where
    R: Read,
{
    let mut consolidator = Consolidator::new();
    let mut stats = KengdicStats::default();

    for line in BufReader::new(rdr).lines().skip(1) {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        stats.rows += 1;
        let Some(row) = KengdicRow::parse(line)? else {
            continue;
        };
        let english = std::slice::from_ref(&row.english);

        if row.hanja.is_empty() {
            consolidator.upsert_unspecified(None, &row.korean, english);
            stats.without_hanja += 1;
            continue;
        }
        stats.with_hanja += 1;

        for hanja in &row.hanja {
            let report = consolidator.upsert_unspecified(Some(hanja), &row.korean, english);
            if !report.is_stored() {
                warn!(
                    "Skipped hanja={hanja:?} korean={:?} english={:?}",
                    row.korean, row.english
                );
            }
            if script::single_char(hanja).is_some() && script::single_char(&row.korean).is_some() {
                stats.character_definitions +=
                    consolidator.add_character_reading(hanja, &row.korean, english);
            }
        }
    }

    info!(
        "Read {} words with hanja, {} words without, {} new Hanja definitions",
        stats.with_hanja, stats.without_hanja, stats.character_definitions
    );
    Ok((consolidator.finish(), stats))
}
