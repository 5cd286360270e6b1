pub mod catalog;
pub mod classify;
pub mod error;
pub mod logging;
pub mod model;
pub mod wire;

use catalog::SubstanceCatalog;
use classify::outcome::{DoseAnalysisResult, DoseAssessment, MetaboliteAnalysisResult};
use error::ToxError;
use model::{DoseAnalysisRequest, Substance};

/// Main API entry point: interpret a measured level for a catalog substance.
///
/// Resolves the substance through `catalog` and applies the ordered
/// interpretation rules to its thresholds.
pub fn analyze_dose(
    catalog: &dyn SubstanceCatalog,
    request: &DoseAnalysisRequest,
) -> Result<DoseAnalysisResult, ToxError> {
    assess_dose(catalog, request).map(|a| a.result)
}

/// Like [`analyze_dose`], also reporting the rule that fired and why.
pub fn assess_dose(
    catalog: &dyn SubstanceCatalog,
    request: &DoseAnalysisRequest,
) -> Result<DoseAssessment, ToxError> {
    let substance = resolve(catalog, request.substance_id)?;
    classify::assess(substance, request.measured_level)
}

/// Interpret a measured level of a named metabolite of a catalog substance.
pub fn analyze_metabolite(
    catalog: &dyn SubstanceCatalog,
    substance_id: u32,
    metabolite_name: &str,
    measured_level: f64,
) -> Result<MetaboliteAnalysisResult, ToxError> {
    let substance = resolve(catalog, substance_id.into())?;
    let metabolite = substance.metabolite(metabolite_name).ok_or_else(|| {
        ToxError::MetaboliteNotFound {
            substance: substance.name.clone(),
            metabolite: metabolite_name.to_string(),
        }
    })?;
    classify::classify_metabolite(substance, metabolite, measured_level)
}

/// Look up a substance, failing with `NotFound` for unknown ids.
///
/// Negative ids and ids past `u32::MAX` are never in a catalog.
pub fn resolve(
    catalog: &dyn SubstanceCatalog,
    substance_id: i64,
) -> Result<&Substance, ToxError> {
    u32::try_from(substance_id)
        .ok()
        .and_then(|id| catalog.get(id))
        .ok_or(ToxError::NotFound(substance_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::builtin_catalog;
    use crate::model::Interpretation;

    fn request(substance_id: i64, measured_level: f64) -> DoseAnalysisRequest {
        DoseAnalysisRequest {
            substance_id,
            measured_level,
        }
    }

    #[test]
    fn test_analyze_acetaminophen() {
        let catalog = builtin_catalog().unwrap();
        let cases = [
            (5.0, Interpretation::SubTherapeutic),
            (15.0, Interpretation::Therapeutic),
            (20.0, Interpretation::Therapeutic),
            (60.0, Interpretation::Toxic),
            (150.0, Interpretation::Toxic),
            (300.0, Interpretation::Lethal),
        ];
        for (level, expected) in cases {
            let result = analyze_dose(catalog, &request(1, level)).unwrap();
            assert_eq!(result.interpretation, expected, "level {level}");
            assert_eq!(result.substance_name, "Acetaminophen");
            assert_eq!(result.unit, "mg/L");
        }
    }

    #[test]
    fn test_unknown_substance() {
        let catalog = builtin_catalog().unwrap();
        let err = analyze_dose(catalog, &request(404, 1.0)).unwrap_err();
        assert!(matches!(err, ToxError::NotFound(404)));
    }

    #[test]
    fn test_unrepresentable_ids_are_not_found() {
        let catalog = builtin_catalog().unwrap();
        for id in [-1, i64::MIN, i64::from(u32::MAX) + 1] {
            let err = analyze_dose(catalog, &request(id, 1.0)).unwrap_err();
            assert!(matches!(err, ToxError::NotFound(n) if n == id), "id {id}");
            assert_eq!(err.kind(), "not_found");
        }
    }

    #[test]
    fn test_assess_reports_rule() {
        let catalog = builtin_catalog().unwrap();
        let a = assess_dose(catalog, &request(5, 6.0)).unwrap();
        assert_eq!(a.result.substance_name, "Cocaine");
        assert_eq!(a.result.interpretation, Interpretation::Lethal);
        assert_eq!(a.rule, "lethal");
    }

    #[test]
    fn test_analyze_metabolite() {
        let catalog = builtin_catalog().unwrap();
        let r = analyze_metabolite(catalog, 2, "desmethyldiazepam", 4.0).unwrap();
        assert_eq!(r.metabolite_name, "Desmethyldiazepam");
        assert_eq!(r.interpretation, Interpretation::Toxic);
        let r = analyze_metabolite(catalog, 2, "Temazepam", 0.1).unwrap();
        assert_eq!(r.interpretation, Interpretation::Therapeutic);
    }

    #[test]
    fn test_unknown_metabolite() {
        let catalog = builtin_catalog().unwrap();
        let err = analyze_metabolite(catalog, 2, "Caffeine", 1.0).unwrap_err();
        assert!(matches!(err, ToxError::MetaboliteNotFound { .. }));
        assert_eq!(err.kind(), "not_found");
    }
}
