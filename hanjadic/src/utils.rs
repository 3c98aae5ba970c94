//! ユーティリティ関数
//!
//! タブ区切りの行の解析など、入力形式に依存する小さな補助関数を提供します。

use csv_core::ReadFieldResult;

use crate::errors::Result;

/// タブ区切りの行を解析してフィールドのベクターに分割する
///
/// 引用符は特別扱いせず、フィールド内の `"` もそのまま残します。
///
/// # 引数
///
/// * `row` - 解析する行（改行を含まない）
///
/// # 戻り値
///
/// 解析されたフィールドを格納する文字列のベクター
///
/// # 例
///
/// ```
/// # use hanjadic::utils::parse_tsv_row;
/// let fields = parse_tsv_row("1\t도착\t到着\tarrival").unwrap();
/// assert_eq!(fields, vec!["1", "도착", "到着", "arrival"]);
///
/// let fields = parse_tsv_row("2\t나무\t\t\"tree\"").unwrap();
/// assert_eq!(fields, vec!["2", "나무", "", "\"tree\""]);
/// ```
pub fn parse_tsv_row(row: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .build();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        let end = match result {
            // Long fields arrive in several chunks.
            ReadFieldResult::OutputFull => continue,
            ReadFieldResult::Field { record_end } => record_end,
            _ => true,
        };
        let value = String::from_utf8(std::mem::take(&mut field)).map_err(|e| e.utf8_error())?;
        fields.push(value);
        if end {
            break;
        }
    }
    Ok(fields)
}
