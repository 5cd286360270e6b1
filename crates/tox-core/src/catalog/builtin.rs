use crate::catalog::schema::Catalog;
use crate::catalog::validate_catalog;
use crate::error::ToxError;
use std::sync::LazyLock;

const SUBSTANCES_JSON: &str = include_str!("../../../../data/substances.json");

static BUILTIN: LazyLock<Result<Catalog, String>> = LazyLock::new(|| {
    let catalog: Catalog = serde_json::from_str(SUBSTANCES_JSON).map_err(|e| e.to_string())?;
    validate_catalog(&catalog).map_err(|e| e.to_string())?;
    Ok(catalog)
});

/// Get the embedded reference catalog.
pub fn builtin_catalog() -> Result<&'static Catalog, ToxError> {
    BUILTIN
        .as_ref()
        .map_err(|reason| ToxError::CatalogInvalid(format!("embedded catalog: {reason}")))
}
