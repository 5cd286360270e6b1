use std::io::Read;
use std::path::Path;
use tox_core::error::ToxError;
use tox_core::model::DoseAnalysisRequest;
use tox_core::wire;

use crate::commands::load_catalog;
use crate::output;

pub fn run(
    catalog_path: Option<&Path>,
    id: u32,
    level: f64,
    metabolite: Option<String>,
    output_format: &str,
    verbose: bool,
) -> Result<(), ToxError> {
    let catalog = load_catalog(catalog_path)?;

    if let Some(name) = metabolite {
        let result = tox_core::analyze_metabolite(&*catalog, id, &name, level)?;
        match output_format {
            "json" => output::json::print(&result)?,
            _ => println!("{}", output::table::format_metabolite(&result, verbose)),
        }
        return Ok(());
    }

    let request = DoseAnalysisRequest {
        substance_id: id.into(),
        measured_level: level,
    };

    match output_format {
        "json" if verbose => output::json::print(&tox_core::assess_dose(&*catalog, &request)?)?,
        "json" => output::json::print(&tox_core::analyze_dose(&*catalog, &request)?)?,
        _ => {
            let assessment = tox_core::assess_dose(&*catalog, &request)?;
            println!("{}", output::table::format_assessment(&assessment, verbose));
        }
    }

    Ok(())
}

/// Answer a serialized request. Returns false if the response is an error payload.
pub fn request(catalog_path: Option<&Path>, input: &Path) -> Result<bool, ToxError> {
    let catalog = load_catalog(catalog_path)?;

    let body = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let response = wire::respond(&*catalog, &body);
    output::json::print(&response)?;
    Ok(response.is_ok())
}
