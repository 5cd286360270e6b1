use crate::model::Interpretation;
use serde::{Deserialize, Serialize};

/// Result of interpreting a measured level of a parent substance.
///
/// Field names are part of the wire format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseAnalysisResult {
    pub substance_name: String,
    /// The measured level, echoed back unchanged.
    pub measured_level: f64,
    /// The substance's dose unit (e.g., "mg/L").
    pub unit: String,
    pub interpretation: Interpretation,
}

/// A dose result together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseAssessment {
    #[serde(flatten)]
    pub result: DoseAnalysisResult,
    /// Name of the classification rule that matched.
    pub rule: String,
    /// Human-readable explanation of the classification.
    pub reason: String,
}

/// Result of interpreting a measured level of a metabolite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaboliteAnalysisResult {
    /// Parent substance name.
    pub substance_name: String,
    pub metabolite_name: String,
    pub measured_level: f64,
    pub unit: String,
    pub interpretation: Interpretation,
    pub rule: String,
    pub reason: String,
}
