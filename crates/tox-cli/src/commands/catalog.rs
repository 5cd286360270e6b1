use std::path::Path;
use tox_core::catalog::query;
use tox_core::error::ToxError;

use crate::commands::load_catalog;

pub fn info(catalog_path: Option<&Path>) -> Result<(), ToxError> {
    let catalog = load_catalog(catalog_path)?;

    println!("{} (version {})", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{desc}");
    }
    println!();

    for category in query::categories(&*catalog) {
        let count = catalog
            .substances
            .iter()
            .filter(|s| s.category == category)
            .count();
        println!("  {:<16} {} substance(s)", category.to_string(), count);
    }

    let metabolites: usize = catalog.substances.iter().map(|s| s.metabolites.len()).sum();
    println!(
        "\n  {} substances, {} metabolites",
        catalog.substances.len(),
        metabolites
    );

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ToxError> {
    let catalog = tox_core::catalog::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Substances: {}", catalog.substances.len());

    // Gaps are allowed but worth pointing out
    let mut warnings = Vec::new();
    for s in &catalog.substances {
        if s.therapeutic_dose_min.is_none()
            && s.therapeutic_dose_max.is_none()
            && s.toxic_dose.is_none()
            && s.lethal_dose.is_none()
        {
            warnings.push(format!(
                "substance '{}' has no thresholds; every level reads as Therapeutic",
                s.name
            ));
        }
        if s.therapeutic_dose_max.is_some() && s.toxic_dose.is_none() {
            warnings.push(format!(
                "substance '{}' has no toxic threshold; levels above the therapeutic range read as Toxic",
                s.name
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
