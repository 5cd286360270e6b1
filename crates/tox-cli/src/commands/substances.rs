use std::path::Path;
use tox_core::catalog::query::{self, SubstanceQuery};
use tox_core::error::ToxError;
use tox_core::model::Category;

use crate::commands::load_catalog;
use crate::output;

pub fn list(
    catalog_path: Option<&Path>,
    category: Option<String>,
    search: Option<String>,
    output_format: &str,
) -> Result<(), ToxError> {
    let catalog = load_catalog(catalog_path)?;

    let category = match category {
        Some(c) => Some(Category::from_str_loose(&c).ok_or_else(|| {
            ToxError::InvalidInput(format!(
                "unknown category '{c}'. Available: pharmaceutical, narcotic, synthetic"
            ))
        })?),
        None => None,
    };

    let found = query::find(&*catalog, &SubstanceQuery { category, search });

    match output_format {
        "json" => output::json::print(&found)?,
        _ => println!("{}", output::table::format_substances(&found)),
    }

    Ok(())
}

pub fn show(catalog_path: Option<&Path>, id: u32, output_format: &str) -> Result<(), ToxError> {
    let catalog = load_catalog(catalog_path)?;
    let substance = tox_core::resolve(&*catalog, id.into())?;

    match output_format {
        "json" => output::json::print(substance)?,
        _ => println!("{}", output::table::format_substance(substance)),
    }

    Ok(())
}

pub fn categories(catalog_path: Option<&Path>) -> Result<(), ToxError> {
    let catalog = load_catalog(catalog_path)?;
    for category in query::categories(&*catalog) {
        println!("{category}");
    }
    Ok(())
}
