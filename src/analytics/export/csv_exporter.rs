use super::{ExportError, FormatHandler};
use crate::models::ClassifiedComment;
use crate::pipeline::AnalysisOutcome;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// CSV列（この順で出力）
pub const CSV_HEADERS: [&str; 6] = [
    "text",
    "published_at",
    "like_count",
    "reply_count",
    "sentiment_label",
    "sentiment_score",
];

/// CSV 1行分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRow {
    pub text: String,
    /// RFC 3339（UTC、秒精度）
    pub published_at: String,
    pub like_count: u64,
    pub reply_count: u64,
    pub sentiment_label: String,
    pub sentiment_score: f64,
}

impl From<&ClassifiedComment> for CommentRow {
    fn from(classified: &ClassifiedComment) -> Self {
        Self {
            text: classified.comment.text.clone(),
            published_at: classified
                .comment
                .published_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            like_count: classified.comment.like_count,
            reply_count: classified.comment.reply_count,
            sentiment_label: classified.sentiment_label.to_string(),
            sentiment_score: classified.sentiment_score,
        }
    }
}

/// CSV形式エクスポーター
pub struct CsvExporter {
    delimiter: char,
    include_headers: bool,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            include_headers: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, include_headers: bool) -> Self {
        self.include_headers = include_headers;
        self
    }

    /// CSVフィールドをエスケープ
    fn escape_csv_field(&self, field: &str) -> String {
        if field.contains(self.delimiter)
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// CSVヘッダーを生成
    fn generate_headers(&self) -> String {
        CSV_HEADERS.join(&self.delimiter.to_string())
    }

    /// 行をCSVに変換
    fn row_to_csv(&self, row: &CommentRow) -> String {
        let fields = [
            self.escape_csv_field(&row.text),
            self.escape_csv_field(&row.published_at),
            row.like_count.to_string(),
            row.reply_count.to_string(),
            self.escape_csv_field(&row.sentiment_label),
            row.sentiment_score.to_string(),
        ];

        fields.join(&self.delimiter.to_string())
    }

    /// 分類済みコメントをCSVに書き出す
    pub fn write_comments(&self, comments: &[ClassifiedComment]) -> String {
        let mut csv_content = String::new();

        // ヘッダー行
        if self.include_headers {
            csv_content.push_str(&self.generate_headers());
            csv_content.push('\n');
        }

        // データ行
        for comment in comments {
            csv_content.push_str(&self.row_to_csv(&CommentRow::from(comment)));
            csv_content.push('\n');
        }

        csv_content
    }

    /// このエクスポーターの設定でCSVを読み戻す
    pub fn read_rows(&self, input: &str) -> Result<Vec<CommentRow>, ExportError> {
        let mut records = split_records(input, self.delimiter)?.into_iter();

        if self.include_headers {
            match records.next() {
                Some(header) if header == CSV_HEADERS => {}
                Some(header) => {
                    return Err(ExportError::InvalidData {
                        message: format!("unexpected CSV header: {}", header.join(",")),
                    })
                }
                None => return Ok(Vec::new()),
            }
        }

        records
            .enumerate()
            .map(|(index, fields)| record_to_row(index + 1, fields))
            .collect()
    }
}

impl FormatHandler for CsvExporter {
    fn export(&self, outcome: &AnalysisOutcome) -> Result<Vec<u8>, ExportError> {
        Ok(self.write_comments(&outcome.comments).into_bytes())
    }

    fn file_extension(&self) -> &str {
        "csv"
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 既定設定（カンマ区切り、ヘッダーあり）でCSVを読む
pub fn parse_csv(input: &str) -> Result<Vec<CommentRow>, ExportError> {
    CsvExporter::new().read_rows(input)
}

/// 引用符付きフィールド内の区切り文字・改行を保持したままレコードに分割
fn split_records(input: &str, delimiter: char) -> Result<Vec<Vec<String>>, ExportError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            c if c == delimiter => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            c => field.push(c),
        }
    }

    if in_quotes {
        return Err(ExportError::InvalidData {
            message: "unterminated quoted field".to_string(),
        });
    }

    // 末尾改行なしの最終行
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

fn record_to_row(line: usize, fields: Vec<String>) -> Result<CommentRow, ExportError> {
    let field_count = fields.len();
    let [text, published_at, like_raw, reply_raw, sentiment_label, score_raw]: [String; 6] =
        fields.try_into().map_err(|_| ExportError::InvalidData {
            message: format!(
                "record {} has {} fields, expected {}",
                line,
                field_count,
                CSV_HEADERS.len()
            ),
        })?;

    let invalid = |column: &str, value: &str| ExportError::InvalidData {
        message: format!("record {}: invalid {} '{}'", line, column, value),
    };

    Ok(CommentRow {
        like_count: like_raw
            .parse()
            .map_err(|_| invalid("like_count", &like_raw))?,
        reply_count: reply_raw
            .parse()
            .map_err(|_| invalid("reply_count", &reply_raw))?,
        sentiment_score: score_raw
            .parse()
            .map_err(|_| invalid("sentiment_score", &score_raw))?,
        text,
        published_at,
        sentiment_label,
    })
}
