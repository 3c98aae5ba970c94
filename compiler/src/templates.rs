//! 品詞テンプレートの一覧
//!
//! ダンプに現れる品詞テンプレート名を初出順に列挙します。分類規則が扱っていない
//! テンプレートを見つけるための調査用のコマンドです。

use std::path::PathBuf;

use clap::Parser;
use hanjadic::classifier::TemplateKind;
use hanjadic::errors::LexiconError;
use hanjadic::{source, JsonlSource};

/// テンプレート一覧コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "templates",
    about = "A program to list every distinct head template name in a dump."
)]
pub struct Args {
    /// Wiktionary dump in JSON Lines (optionally compressed with zstd, `*.zst`).
    #[clap(value_name = "INPUT")]
    input: PathBuf,
}

/// テンプレート一覧の処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum TemplatesError {
    /// 語彙構築エラー
    #[error("Reading the dump failed: {0}")]
    Lexicon(#[from] LexiconError),
}

/// テンプレート一覧コマンドを実行する
///
/// 認識されるテンプレートには `*` を付けて出力します。
pub fn run(args: Args) -> Result<(), TemplatesError> {
    let source = JsonlSource::new(&args.input)?;
    for name in source::distinct_head_templates(&source)? {
        let mark = if TemplateKind::from_name(&name).is_some() { "*" } else { " " };
        println!("{mark} {name}");
    }
    Ok(())
}
