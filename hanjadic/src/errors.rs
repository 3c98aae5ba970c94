//! エラー型の定義
//!
//! このモジュールは、hanjadicライブラリで使用されるすべてのエラー型を定義します。
//! レコード単位の問題（発音が取れない、長さが合わない等）はエラーではなく診断ログとして
//! 扱われるため、ここに現れるのは実行全体を中断させる致命的な条件のみです。

use std::error::Error;
use std::fmt;

/// hanjadic専用のResult型
///
/// エラー型としてデフォルトで[`LexiconError`]を使用します。
pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

/// hanjadicのエラー型
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    /// 入力ダンプの行が解析できない場合などに発生します。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// UTF-8エンコーディングエラー
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// I/Oエラー
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl LexiconError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let e = LexiconError::invalid_format("kengdic", "row 3 has 2 columns");
        assert_eq!(
            "InvalidFormatError: kengdic: row 3 has 2 columns",
            e.to_string()
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let e = LexiconError::invalid_argument("out_dir", "not a directory");
        assert_eq!("InvalidArgumentError: out_dir: not a directory", e.to_string());
    }
}
