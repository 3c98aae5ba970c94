//! Wiktionaryダンプからのビルドモジュール
//!
//! このモジュールは、JSON Lines形式のWiktionaryダンプ（`.zst` 圧縮にも対応）から
//! 漢字1字と単語を抽出し、SQLファイルとして出力する機能を提供します。

use std::path::PathBuf;

use clap::Parser;
use hanjadic::errors::LexiconError;
use hanjadic::{sql, JsonlSource, Pipeline, PipelineConfig};

/// Wiktionaryビルドコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "wiktionary",
    about = "A program to build SQL files from a Wiktionary JSON Lines dump."
)]
pub struct Args {
    /// Wiktionary dump in JSON Lines (optionally compressed with zstd, `*.zst`).
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Directory to which the SQL files are output. Created if it does not exist.
    #[clap(short = 'o', long)]
    out_dir: PathBuf,

    /// Skip the preliminary pass that parses every record before building.
    #[clap(long)]
    skip_validation: bool,

    /// Keep pure-native nouns whose Hangul form is already Hanja-rooted.
    #[clap(long)]
    keep_native_homonyms: bool,
}

/// Wiktionaryビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum WiktionaryError {
    /// 語彙構築エラー
    #[error("Lexicon building failed: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Wiktionaryビルドコマンドを実行する
///
/// # エラー
///
/// 入力の読み込み、解析、または出力に失敗した場合、`WiktionaryError`を返します。
pub fn run(args: Args) -> Result<(), WiktionaryError> {
    let config = PipelineConfig {
        validate_source: !args.skip_validation,
        keep_native_homonyms: args.keep_native_homonyms,
    };
    let source = JsonlSource::new(&args.input)?;

    println!("Reading from {}", source.path().display());
    let lexicon = Pipeline::with_config(source, config).run()?;
    println!(
        "Extracted {} characters ({} readings) and {} words",
        lexicon.characters.len(),
        lexicon.characters.num_readings(),
        lexicon.num_words()
    );

    println!("Writing the SQL files...");
    for file in sql::write_all(&args.out_dir, &lexicon)? {
        println!("  {} ({} rows)", file.path.display(), file.num_rows);
    }

    println!("Successfully built the SQL files to {}", args.out_dir.display());
    Ok(())
}
