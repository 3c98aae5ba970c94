//! レコードの供給源
//!
//! パイプラインはカテゴリごとに入力全体を走査し直すため、供給源は何度でも先頭から
//! 読み直せる必要があります。[`RecordSource::records`] は呼ばれるたびに新しいパスを開始します。

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use log::info;

use crate::errors::{LexiconError, Result};
use crate::record::LexicalRecord;

/// 1回のパスで得られるレコードのイテレータ
pub type Records<'a> = Box<dyn Iterator<Item = Result<LexicalRecord>> + 'a>;

/// 繰り返し読み直せるレコードの供給源
pub trait RecordSource {
    /// 先頭からレコードを読み出すイテレータを返します。
    ///
    /// # エラー
    ///
    /// 入力を開けない場合はエラーを返します。読み出し中の解析エラーはイテレータの要素として
    /// 返され、実行全体を中断させる致命的なエラーとして扱われます。
    fn records(&self) -> Result<Records<'_>>;
}

impl RecordSource for [LexicalRecord] {
    fn records(&self) -> Result<Records<'_>> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl RecordSource for Vec<LexicalRecord> {
    fn records(&self) -> Result<Records<'_>> {
        self.as_slice().records()
    }
}

impl<S> RecordSource for &S
where
    S: RecordSource + ?Sized,
{
    fn records(&self) -> Result<Records<'_>> {
        (**self).records()
    }
}

/// JSON Lines形式のダンプファイル
///
/// パスごとにファイルを開き直します。拡張子が `.zst` の場合はzstdで透過的に展開します。
#[derive(Clone, Debug)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    /// 新しい供給源を作成します。
    ///
    /// # エラー
    ///
    /// パスがディレクトリの場合は [`LexiconError::InvalidArgument`] を返します。
    pub fn new<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            return Err(LexiconError::invalid_argument(
                "path",
                format!("{} is a directory, but a file was expected", path.display()),
            ));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Box<dyn BufRead>> {
        let file = File::open(&self.path)?;
        let is_zstd = self
            .path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zst"));
        if is_zstd {
            Ok(Box::new(BufReader::new(zstd::Decoder::new(file)?)))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

impl RecordSource for JsonlSource {
    fn records(&self) -> Result<Records<'_>> {
        Ok(Box::new(read_jsonl(self.open()?)))
    }
}

/// リーダーからJSON Lines形式のレコードを読み出します。
///
/// 空行は無視されます。解析できない行は行番号付きの
/// [`LexiconError::InvalidFormat`] になります。
pub fn read_jsonl<'a, R>(rdr: R) -> impl Iterator<Item = Result<LexicalRecord>> + 'a
where
    R: BufRead + 'a,
{
    rdr.lines().enumerate().filter_map(|(i, line)| {
        let line = match line {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        if line.trim().is_empty() {
            return None;
        }
        Some(serde_json::from_str(&line).map_err(|e| {
            LexiconError::invalid_format("jsonl", format!("line {}: {}", i + 1, e))
        }))
    })
}

/// 全レコードを一度読み、すべて解析できることを確認します。
///
/// # 戻り値
///
/// レコード数
///
/// # エラー
///
/// 最初に見つかった解析エラーを返します。
pub fn validate<S>(source: &S) -> Result<usize>
where
    S: RecordSource + ?Sized,
{
    let mut count = 0;
    for record in source.records()? {
        record?;
        count += 1;
    }
    info!("Parsed all {count} records as JSON");
    Ok(count)
}

/// 品詞テンプレート名を初出順に重複なく列挙します。
pub fn distinct_head_templates<S>(source: &S) -> Result<Vec<String>>
where
    S: RecordSource + ?Sized,
{
    let mut seen = HashSet::new();
    let mut names = vec![];
    for record in source.records()? {
        for template in record?.head_templates {
            if seen.insert(template.name.clone()) {
                names.push(template.name);
            }
        }
    }
    Ok(names)
}

/// 任意のリーダーの内容をメモリに読み込み、繰り返し読める供給源にします。
pub fn load<R>(rdr: R) -> Result<Vec<LexicalRecord>>
where
    R: Read,
{
    read_jsonl(BufReader::new(rdr)).collect()
}
