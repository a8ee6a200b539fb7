use super::{ExportError, FormatHandler};
use crate::analytics::AggregateReport;
use crate::models::{ClassifiedComment, VideoDetails};
use crate::pipeline::AnalysisOutcome;
use serde::Serialize;

/// JSON出力の構造
#[derive(Serialize)]
struct JsonDocument<'a> {
    video: &'a VideoDetails,
    report: &'a AggregateReport,
    comments: &'a [ClassifiedComment],
}

/// JSON形式エクスポーター
pub struct JsonExporter {
    pretty_print: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

impl FormatHandler for JsonExporter {
    fn export(&self, outcome: &AnalysisOutcome) -> Result<Vec<u8>, ExportError> {
        let document = JsonDocument {
            video: &outcome.details,
            report: &outcome.report,
            comments: &outcome.comments,
        };

        let json_bytes = if self.pretty_print {
            serde_json::to_vec_pretty(&document)
        } else {
            serde_json::to_vec(&document)
        }
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

        Ok(json_bytes)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}
