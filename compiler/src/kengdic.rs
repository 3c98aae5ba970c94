//! Kengdicからのビルドモジュール
//!
//! タブ区切りの韓英辞書（Kengdic）を読み込み、SQLファイルとして出力します。

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use hanjadic::errors::LexiconError;
use hanjadic::{kengdic, sql};

/// Kengdicビルドコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "kengdic",
    about = "A program to build SQL files from a Kengdic TSV dump."
)]
pub struct Args {
    /// Kengdic dump (tab-separated, with a header line).
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Directory to which the SQL files are output. Created if it does not exist.
    #[clap(short = 'o', long)]
    out_dir: PathBuf,
}

/// Kengdicビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum KengdicError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 語彙構築エラー
    #[error("Lexicon building failed: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Kengdicビルドコマンドを実行する
pub fn run(args: Args) -> Result<(), KengdicError> {
    println!("Reading from {}, writing to {}", args.input.display(), args.out_dir.display());
    let (lexicon, stats) = kengdic::consolidate(File::open(&args.input)?)?;
    println!(
        "Read {} words with hanja, {} words without, {} new Hanja definitions.",
        stats.with_hanja, stats.without_hanja, stats.character_definitions
    );

    println!("Writing the SQL files...");
    for file in sql::write_all(&args.out_dir, &lexicon)? {
        println!("  {} ({} rows)", file.path.display(), file.num_rows);
    }

    println!("Successfully built the SQL files to {}", args.out_dir.display());
    Ok(())
}
