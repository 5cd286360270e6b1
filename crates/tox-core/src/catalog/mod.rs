pub mod builtin;
pub mod query;
pub mod schema;

use crate::classify::Thresholds;
use crate::error::ToxError;
use schema::Catalog;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

pub use schema::SubstanceCatalog;

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, ToxError> {
    let content = std::fs::read_to_string(path).map_err(|e| ToxError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let catalog = parse_catalog(&content, path)?;
    info!(
        path = %path.display(),
        substances = catalog.substances.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, ToxError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|e| ToxError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, ToxError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(ToxError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), ToxError> {
    check_catalog(catalog)
        .inspect_err(|e| warn!(catalog = %catalog.name, error = %e, "rejected catalog"))
}

fn check_catalog(catalog: &Catalog) -> Result<(), ToxError> {
    if catalog.substances.is_empty() {
        return Err(ToxError::CatalogInvalid(
            "substances must not be empty".into(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for substance in &catalog.substances {
        if substance.name.trim().is_empty() {
            return Err(ToxError::CatalogInvalid(format!(
                "substance {} has an empty name",
                substance.id
            )));
        }

        if !seen_ids.insert(substance.id) {
            return Err(ToxError::CatalogInvalid(format!(
                "duplicate substance id {}",
                substance.id
            )));
        }

        if substance.dose_unit.trim().is_empty() {
            return Err(ToxError::CatalogInvalid(format!(
                "substance '{}' has an empty dose unit",
                substance.name
            )));
        }

        Thresholds::of_substance(substance).validate(&substance.name)?;

        for metabolite in &substance.metabolites {
            if metabolite.name.trim().is_empty() {
                return Err(ToxError::CatalogInvalid(format!(
                    "substance '{}' has a metabolite with an empty name",
                    substance.name
                )));
            }
            Thresholds::of_metabolite(metabolite).validate(&metabolite.name)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "substances": [
                {
                    "id": 1,
                    "name": "Testamine",
                    "category": "pharmaceutical",
                    "therapeutic_dose_min": "10",
                    "therapeutic_dose_max": "50",
                    "toxic_dose": "100",
                    "lethal_dose": "200",
                    "metabolites": [
                        { "name": "Nortestamine", "is_active": true, "toxic_level": "3", "unit": "mg/L" }
                    ]
                }
            ]
        }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.name, "Test");
        assert_eq!(catalog.substances.len(), 1);
        assert_eq!(catalog.substances[0].metabolites.len(), 1);
    }

    #[test]
    fn test_empty_substances_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "substances": [] }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "substances": [
                { "id": 1, "name": "A", "category": "narcotic" },
                { "id": 1, "name": "B", "category": "narcotic" }
            ]
        }"#;
        let err = parse_catalog_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate substance id 1"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "substances": [
                { "id": 1, "name": "A", "category": "herbal" }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_misordered_thresholds_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "substances": [
                { "id": 1, "name": "A", "category": "narcotic", "toxic_dose": "5", "lethal_dose": "1" }
            ]
        }"#;
        let err = parse_catalog_str(json).unwrap_err();
        assert!(matches!(err, ToxError::MisconfiguredThresholds { .. }));
    }

    #[test]
    fn test_misordered_metabolite_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "substances": [
                {
                    "id": 1,
                    "name": "A",
                    "category": "synthetic",
                    "metabolites": [
                        { "name": "M", "therapeutic_range_min": "2", "therapeutic_range_max": "1" }
                    ]
                }
            ]
        }"#;
        let err = parse_catalog_str(json).unwrap_err();
        assert!(err.to_string().contains("'M'"));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "File",
                "version": "2",
                "substances": [ {{ "id": 7, "name": "Q", "category": "synthetic" }} ]
            }}"#
        )
        .unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.get(7).unwrap().name, "Q");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, ToxError::CatalogLoad { .. }));
    }
}
