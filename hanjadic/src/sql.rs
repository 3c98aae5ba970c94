//! SQLファイルへの書き出し
//!
//! 統合された語彙を4つのテーブルの `INSERT` 文として書き出します。
//! 各ファイルは1つの文で、1行に1つのタプルを持ち、`ON CONFLICT DO NOTHING;` で終わります。
//! 行を持たないテーブルは空のファイルになります。

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::consolidator::{CharacterIndex, ConsolidatedLexicon, KoreanWordEntry, WordIndex};
use crate::errors::{LexiconError, Result};

pub const ENGLISH_HANJA_DEFINITION_FILE: &str = "english_hanja_definition.sql";
pub const KOREAN_PRONUNCIATION_FILE: &str = "korean_pronunciation.sql";
pub const KOREAN_HANJA_DEFINITION_FILE: &str = "korean_hanja_definition.sql";
pub const WORD_LIST_FILE: &str = "word_list.sql";

/// SQLの文字列リテラル用に単一引用符を二重にします。
///
/// # 例
///
/// ```
/// use hanjadic::sql::escape;
///
/// assert_eq!("can''t", escape("can't"));
/// ```
pub fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// 1つの `INSERT` 文を組み立てるライター
///
/// 最初の行を書くときに文の先頭を出力するため、行がなければ何も書きません。
struct InsertStatement<'a, W> {
    wtr: &'a mut W,
    table: &'static str,
    num_rows: usize,
}

impl<'a, W> InsertStatement<'a, W>
where
    W: Write,
{
    fn new(wtr: &'a mut W, table: &'static str) -> Self {
        Self {
            wtr,
            table,
            num_rows: 0,
        }
    }

    /// `None` は `NULL` として書き出します。
    fn push(&mut self, values: &[Option<&str>]) -> Result<()> {
        if self.num_rows == 0 {
            writeln!(self.wtr, "INSERT INTO `{}` VALUES", self.table)?;
        } else {
            writeln!(self.wtr, ",")?;
        }
        write!(self.wtr, "(")?;
        for (i, value) in values.iter().enumerate() {
            if i != 0 {
                write!(self.wtr, ", ")?;
            }
            match value {
                Some(value) => write!(self.wtr, "'{}'", escape(value))?,
                None => write!(self.wtr, "NULL")?,
            }
        }
        write!(self.wtr, ")")?;
        self.num_rows += 1;
        Ok(())
    }

    fn finish(self) -> Result<usize> {
        if self.num_rows != 0 {
            write!(self.wtr, "\nON CONFLICT DO NOTHING;")?;
        }
        self.wtr.flush()?;
        Ok(self.num_rows)
    }
}

/// 英語の意味、なければ語釈を返します。
fn meanings<'a>(english: &'a BTreeSet<String>, glosses: &'a BTreeSet<String>) -> &'a BTreeSet<String> {
    if english.is_empty() {
        glosses
    } else {
        english
    }
}

/// 漢字1字の英語の意味を `(漢字, 意味)` の行として書き出します。
///
/// # 戻り値
///
/// 書き出した行数
pub fn write_english_hanja_definitions<W>(mut wtr: W, characters: &CharacterIndex) -> Result<usize>
where
    W: Write,
{
    let mut stmt = InsertStatement::new(&mut wtr, "english_hanja_definition");
    let mut buf = [0; 4];
    for (hanja, _, entry) in characters.sorted() {
        let hanja = hanja.encode_utf8(&mut buf);
        for meaning in meanings(&entry.english_meanings, &entry.glosses) {
            stmt.push(&[Some(&*hanja), Some(meaning.as_str())])?;
        }
    }
    stmt.finish()
}

/// 漢字1字の読みを `(漢字, 読み)` の行として書き出します。
pub fn write_korean_pronunciations<W>(mut wtr: W, characters: &CharacterIndex) -> Result<usize>
where
    W: Write,
{
    let mut stmt = InsertStatement::new(&mut wtr, "korean_pronunciation");
    for (hanja, hangul, _) in characters.sorted() {
        let (hanja, hangul) = (hanja.to_string(), hangul.to_string());
        stmt.push(&[Some(hanja.as_str()), Some(hangul.as_str())])?;
    }
    stmt.finish()
}

/// 漢字1字の韓国語の意味を `(漢字, 意味)` の行として書き出します。
///
/// 韓国語の意味を持たない読みは警告を出して読み飛ばします。
pub fn write_korean_hanja_definitions<W>(mut wtr: W, characters: &CharacterIndex) -> Result<usize>
where
    W: Write,
{
    let mut stmt = InsertStatement::new(&mut wtr, "korean_hanja_definition");
    let mut buf = [0; 4];
    for (hanja, hangul, entry) in characters.sorted() {
        if entry.korean_meanings.is_empty() {
            warn!("No Korean meanings for {hanja}/{hangul}");
            continue;
        }
        let hanja = hanja.encode_utf8(&mut buf);
        for meaning in &entry.korean_meanings {
            stmt.push(&[Some(&*hanja), Some(meaning.as_str())])?;
        }
    }
    stmt.finish()
}

/// 単語を `(漢字表記 または NULL, ハングル形, 意味, 品詞)` の行として書き出します。
///
/// 索引は与えた順に、各索引の中はソート順に書き出します。意味も語釈も持たない項目は書き出しません。
pub fn write_word_list<'a, W, I>(mut wtr: W, indices: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a WordIndex>,
{
    let mut stmt = InsertStatement::new(&mut wtr, "word_list");
    for index in indices {
        for entry in index.sorted() {
            write_word(&mut stmt, entry)?;
        }
    }
    stmt.finish()
}

fn write_word<W>(stmt: &mut InsertStatement<'_, W>, entry: &KoreanWordEntry) -> Result<()>
where
    W: Write,
{
    let pos = entry.part_of_speech.as_str();
    for meaning in meanings(&entry.english_meanings, &entry.glosses) {
        stmt.push(&[
            entry.hanja.as_deref(),
            Some(entry.hangul.as_str()),
            Some(meaning.as_str()),
            Some(pos),
        ])?;
    }
    Ok(())
}

/// 出力したファイルと行数
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub num_rows: usize,
}

/// 4つのSQLファイルを出力ディレクトリに書き出します。
///
/// ディレクトリが存在しなければ作成します。
///
/// # エラー
///
/// 出力先がディレクトリでない場合は [`LexiconError::InvalidArgument`] を返します。
pub fn write_all<P>(out_dir: P, lexicon: &ConsolidatedLexicon) -> Result<Vec<WrittenFile>>
where
    P: AsRef<Path>,
{
    let out_dir = out_dir.as_ref();
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(LexiconError::invalid_argument(
            "out_dir",
            format!("{} is not a directory", out_dir.display()),
        ));
    }
    fs::create_dir_all(out_dir)?;

    let create = |name: &str| -> Result<(PathBuf, BufWriter<File>)> {
        let path = out_dir.join(name);
        let file = File::create(&path)?;
        Ok((path, BufWriter::new(file)))
    };

    let mut written = vec![];

    let (path, wtr) = create(ENGLISH_HANJA_DEFINITION_FILE)?;
    let num_rows = write_english_hanja_definitions(wtr, &lexicon.characters)?;
    written.push(WrittenFile { path, num_rows });

    let (path, wtr) = create(KOREAN_PRONUNCIATION_FILE)?;
    let num_rows = write_korean_pronunciations(wtr, &lexicon.characters)?;
    written.push(WrittenFile { path, num_rows });

    let (path, wtr) = create(KOREAN_HANJA_DEFINITION_FILE)?;
    let num_rows = write_korean_hanja_definitions(wtr, &lexicon.characters)?;
    written.push(WrittenFile { path, num_rows });

    let (path, wtr) = create(WORD_LIST_FILE)?;
    let num_rows = write_word_list(wtr, lexicon.word_indices())?;
    written.push(WrittenFile { path, num_rows });

    for file in &written {
        info!("Wrote {} rows to {}", file.num_rows, file.path.display());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::classifier::PartOfSpeech;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn characters() -> CharacterIndex {
        let mut index = CharacterIndex::new();
        index.add("犬", &strings(&["견"]), &strings(&["dog"]), &strings(&["개"]), &[]);
        index.add("樂", &strings(&["락"]), &[], &[], &strings(&["pleasure"]));
        index
    }

    #[test]
    fn test_escape() {
        assert_eq!("it''s", escape("it's"));
        assert_eq!("''''", escape("''"));
        assert_eq!("tree", escape("tree"));
    }

    #[test]
    fn test_write_english_hanja_definitions() {
        let mut buf = vec![];
        let num_rows = write_english_hanja_definitions(&mut buf, &characters()).unwrap();
        assert_eq!(2, num_rows);
        assert_eq!(
            "INSERT INTO `english_hanja_definition` VALUES\n\
            ('樂', 'pleasure'),\n\
            ('犬', 'dog')\n\
            ON CONFLICT DO NOTHING;",
            String::from_utf8(buf).unwrap()
        );
    }

    #[test]
    fn test_write_korean_pronunciations() {
        let mut buf = vec![];
        write_korean_pronunciations(&mut buf, &characters()).unwrap();
        assert_eq!(
            "INSERT INTO `korean_pronunciation` VALUES\n\
            ('樂', '락'),\n\
            ('犬', '견')\n\
            ON CONFLICT DO NOTHING;",
            String::from_utf8(buf).unwrap()
        );
    }

    #[test]
    fn test_write_korean_hanja_definitions_skips_empty_slots() {
        let mut buf = vec![];
        let num_rows = write_korean_hanja_definitions(&mut buf, &characters()).unwrap();
        assert_eq!(1, num_rows);
        assert_eq!(
            "INSERT INTO `korean_hanja_definition` VALUES\n\
            ('犬', '개')\n\
            ON CONFLICT DO NOTHING;",
            String::from_utf8(buf).unwrap()
        );
    }

    #[test]
    fn test_write_word_list() {
        let mut hanja_rooted = WordIndex::new();
        hanja_rooted.upsert(Some("到着"), "도착", &strings(&["arrival"]), &[], PartOfSpeech::Noun);
        let mut native = WordIndex::new();
        native.upsert(None, "할머니", &[], &strings(&["grandma's mother"]), PartOfSpeech::Noun);
        native.upsert(None, "아무", &[], &[], PartOfSpeech::Noun);

        let mut buf = vec![];
        let num_rows = write_word_list(&mut buf, [&hanja_rooted, &native]).unwrap();
        assert_eq!(2, num_rows);
        assert_eq!(
            "INSERT INTO `word_list` VALUES\n\
            ('到着', '도착', 'arrival', 'noun'),\n\
            (NULL, '할머니', 'grandma''s mother', 'noun')\n\
            ON CONFLICT DO NOTHING;",
            String::from_utf8(buf).unwrap()
        );
    }

    #[test]
    fn test_empty_table() {
        let mut buf = vec![];
        assert_eq!(0, write_word_list(&mut buf, [&WordIndex::new()]).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_all() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("sql");
        let lexicon = ConsolidatedLexicon {
            characters: characters(),
            ..Default::default()
        };
        let written = write_all(&out_dir, &lexicon).unwrap();
        assert_eq!(4, written.len());
        assert_eq!(out_dir.join(WORD_LIST_FILE), written[3].path);
        assert_eq!(0, written[3].num_rows);
        assert_eq!("", fs::read_to_string(out_dir.join(WORD_LIST_FILE)).unwrap());
        assert!(fs::read_to_string(out_dir.join(KOREAN_PRONUNCIATION_FILE))
            .unwrap()
            .contains("('犬', '견')"));
    }

    #[test]
    fn test_write_all_to_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            write_all(file.path(), &ConsolidatedLexicon::default()),
            Err(LexiconError::InvalidArgument(_))
        ));
    }
}
