//! Serialized request/response handling for dose analysis.

use crate::catalog::SubstanceCatalog;
use crate::classify::outcome::DoseAnalysisResult;
use crate::error::{ErrorPayload, ToxError};
use crate::model::DoseAnalysisRequest;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Either a successful result or an error payload, serialized without a tag
/// so clients tell them apart by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoseAnalysisResponse {
    Ok(DoseAnalysisResult),
    Err(ErrorPayload),
}

impl DoseAnalysisResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, DoseAnalysisResponse::Ok(_))
    }
}

impl From<Result<DoseAnalysisResult, ToxError>> for DoseAnalysisResponse {
    fn from(result: Result<DoseAnalysisResult, ToxError>) -> Self {
        match result {
            Ok(r) => DoseAnalysisResponse::Ok(r),
            Err(e) => DoseAnalysisResponse::Err(ErrorPayload::from(&e)),
        }
    }
}

/// Parse a serialized `DoseAnalysisRequest`.
///
/// Malformed JSON, missing fields and non-numeric levels are all reported as
/// `InvalidInput`.
pub fn parse_request(json: &str) -> Result<DoseAnalysisRequest, ToxError> {
    serde_json::from_str(json)
        .map_err(|e| ToxError::InvalidInput(format!("malformed dose analysis request: {e}")))
}

/// Handle one serialized request end to end.
pub fn respond(catalog: &dyn SubstanceCatalog, json: &str) -> DoseAnalysisResponse {
    let result = parse_request(json).and_then(|request| crate::analyze_dose(catalog, &request));
    if let Err(ref e) = result {
        warn!(kind = e.kind(), error = %e, "dose analysis failed");
    }
    result.into()
}
