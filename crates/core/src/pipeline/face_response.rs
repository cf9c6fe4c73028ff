use serde::{Deserialize, Serialize};

use crate::pipeline::detect_faces_use_case::FaceReport;
use crate::pipeline::error::PipelineError;

/// Wire payload for one request. `status` is always present; the
/// remaining fields depend on the outcome and are omitted from JSON
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<usize>,
}

impl FaceResponse {
    pub fn ok(report: FaceReport) -> Self {
        Self {
            status: "ok".into(),
            message: None,
            annotated: Some(report.annotated),
            faces: Some(report.faces),
            count: Some(report.count),
            saved: Some(report.saved),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: Some(message.into()),
            annotated: None,
            faces: None,
            count: None,
            saved: None,
        }
    }
}

impl From<Result<FaceReport, PipelineError>> for FaceResponse {
    fn from(result: Result<FaceReport, PipelineError>) -> Self {
        match result {
            Ok(report) => Self::ok(report),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
