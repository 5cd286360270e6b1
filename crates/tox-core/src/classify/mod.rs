pub mod engine;
pub mod outcome;
pub mod rules;
pub mod thresholds;

pub use engine::{assess, classify, classify_metabolite};
pub use outcome::{DoseAnalysisResult, DoseAssessment, MetaboliteAnalysisResult};
pub use thresholds::Thresholds;
