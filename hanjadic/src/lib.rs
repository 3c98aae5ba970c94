//! # hanjadic
//!
//! 辞書データのダンプから漢字1字の読みと意味、および韓国語の単語を抽出するライブラリです。
//!
//! ## 概要
//!
//! 入力は見出し語ごとのレコード（品詞テンプレート、文法形式、語義）の列です。各レコードを
//! 漢字1字・漢字語・固有語のいずれかに分類し、漢字表記をハングル形に位置合わせしたうえで、
//! `(漢字表記, ハングル形)` をキーとする索引に意味を統合します。
//!
//! ## 主な機能
//!
//! - **分類**: 品詞テンプレートと見出し語の文字種による分類
//! - **位置合わせ**: 空白や複数表記（`／` 区切り）を含む漢字表記とハングル形の対応付け
//! - **語尾除去**: 用言の辞書形からの語尾の除去
//! - **統合**: 意味の和集合による統合と、固有語の漢字語に対する重複除去
//! - **出力**: 4つのテーブルのSQLファイルの生成
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use hanjadic::{source, Pipeline};
//!
//! let dump = r#"{"word":"도착","head_templates":[{"name":"ko-noun","args":{}}],"forms":[{"tags":["hanja"],"form":"到着"}],"senses":[{"links":[["arrival","arrival"]],"glosses":["arrival"]}]}
//! {"word":"歸還不能地點","head_templates":[{"name":"ko-noun","args":{"hangeul":"귀환 불능 지점"}}],"senses":[{"glosses":["point of no return"]}]}"#;
//!
//! let records = source::load(dump.as_bytes())?;
//! let lexicon = Pipeline::new(records).run()?;
//!
//! assert!(lexicon.hanja_rooted.get(Some("到着"), "도착").is_some());
//! assert!(lexicon.hanja_rooted.get(Some("歸還 不能 地點"), "귀환 불능 지점").is_some());
//! # Ok(())
//! # }
//! ```

/// 漢字表記とハングル形の位置合わせ
pub mod aligner;

/// レコードの分類
pub mod classifier;

/// 候補の統合と索引
pub mod consolidator;

/// エラー型の定義
pub mod errors;

/// タブ区切りの韓英辞書の読み込み
pub mod kengdic;

pub mod pipeline;

/// 入力レコードの型定義
pub mod record;

/// 文字種の判定
pub mod script;

pub mod source;

/// SQLファイルの生成
pub mod sql;

/// 活用語尾の除去
pub mod suffix;

/// 内部ユーティリティ関数
pub mod utils;


// Re-exports
pub use consolidator::{ConsolidatedLexicon, Consolidator};
pub use pipeline::{LexicalCategory, Pipeline, PipelineConfig};
pub use source::{JsonlSource, RecordSource};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
