//! hanjadic 辞書コンパイラのメインエントリーポイント
//!
//! このモジュールは、辞書データのダンプから漢字と韓国語の単語を抽出し、
//! SQLファイルを生成するためのサブコマンドを提供します。

mod kengdic;
mod templates;
mod wiktionary;

use clap::Parser;
use thiserror::Error;

use crate::{kengdic::KengdicError, templates::TemplatesError, wiktionary::WiktionaryError};

/// コマンドライン引数の構造体
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// WiktionaryのJSON LinesダンプからSQLファイルを生成します
    ///
    /// 漢字1字、漢字語、固有語の名詞類、固有語の用言類をそれぞれ別のパスで抽出します。
    Wiktionary(wiktionary::Args),

    /// Kengdicのタブ区切りダンプからSQLファイルを生成します
    Kengdic(kengdic::Args),

    /// ダンプに現れる品詞テンプレート名を一覧表示します
    Templates(templates::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// Wiktionaryからのビルド中のエラー
    #[error(transparent)]
    WiktionaryError(#[from] WiktionaryError),
    /// Kengdicからのビルド中のエラー
    #[error(transparent)]
    KengdicError(#[from] KengdicError),
    /// テンプレート一覧の作成中のエラー
    #[error(transparent)]
    TemplatesError(#[from] TemplatesError),
}

/// メイン関数
///
/// ログ出力を初期化し（既定は `info`、`RUST_LOG` で変更可能）、
/// コマンドライン引数をパースして指定されたサブコマンドを実行します。
fn main() -> Result<(), CompileError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");
    match cli.command {
        Command::Wiktionary(args) => Ok(wiktionary::run(args)?),
        Command::Kengdic(args) => Ok(kengdic::run(args)?),
        Command::Templates(args) => Ok(templates::run(args)?),
    }
}
