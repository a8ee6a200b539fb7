use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::pipeline::AnalysisOutcome;

pub mod csv_exporter;
pub mod json_exporter;

pub use csv_exporter::{parse_csv, CommentRow, CsvExporter, CSV_HEADERS};
pub use json_exporter::JsonExporter;

/// エクスポート形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// 拡張子から形式を推定
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// エクスポートエラー
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported format: {format:?}")]
    UnsupportedFormat { format: ExportFormat },

    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    #[error("File access error: {path}")]
    FileAccess { path: String },
}

/// フォーマットハンドラートレイト
pub trait FormatHandler: Send + Sync {
    fn export(&self, outcome: &AnalysisOutcome) -> Result<Vec<u8>, ExportError>;
    fn file_extension(&self) -> &str;
}

/// エクスポートマネージャー
pub struct ExportManager {
    format_handlers: HashMap<ExportFormat, Box<dyn FormatHandler>>,
}

impl ExportManager {
    /// 新しいエクスポートマネージャーを作成
    pub fn new() -> Self {
        let mut manager = Self {
            format_handlers: HashMap::new(),
        };

        // デフォルトハンドラーを登録
        manager.register_handler(ExportFormat::Csv, Box::new(CsvExporter::new()));
        manager.register_handler(ExportFormat::Json, Box::new(JsonExporter::new()));

        manager
    }

    /// フォーマットハンドラーを登録
    pub fn register_handler(&mut self, format: ExportFormat, handler: Box<dyn FormatHandler>) {
        self.format_handlers.insert(format, handler);
    }

    /// データをエクスポート
    pub fn export(
        &self,
        outcome: &AnalysisOutcome,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ExportError> {
        let handler = self
            .format_handlers
            .get(&format)
            .ok_or(ExportError::UnsupportedFormat { format })?;

        handler.export(outcome)
    }

    /// ファイルへ書き出し、書き込んだバイト数を返す
    pub fn export_to_file(
        &self,
        outcome: &AnalysisOutcome,
        format: ExportFormat,
        path: &Path,
    ) -> Result<usize, ExportError> {
        let bytes = self.export(outcome, format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                return Err(ExportError::FileAccess {
                    path: parent.display().to_string(),
                });
            }
        }

        std::fs::write(path, &bytes)?;
        tracing::info!(
            "💾 Exported {} comments as {} to {} ({} bytes)",
            outcome.comments.len(),
            format.file_extension(),
            path.display(),
            bytes.len()
        );

        Ok(bytes.len())
    }

    /// サポートされている形式を取得
    pub fn supported_formats(&self) -> Vec<ExportFormat> {
        self.format_handlers.keys().copied().collect()
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
