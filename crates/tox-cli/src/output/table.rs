use rust_decimal::Decimal;
use tox_core::classify::outcome::{DoseAssessment, MetaboliteAnalysisResult};
use tox_core::model::{Interpretation, Substance};

fn show(value: Option<Decimal>) -> String {
    value
        .map(|v| v.normalize().to_string())
        .unwrap_or_else(|| "-".into())
}

fn range(min: Option<Decimal>, max: Option<Decimal>) -> String {
    match (min, max) {
        (None, None) => "-".into(),
        _ => format!("{} - {}", show(min), show(max)),
    }
}

fn marker(interpretation: Interpretation) -> &'static str {
    match interpretation {
        Interpretation::Lethal => " !!",
        Interpretation::Toxic => " !",
        _ => "",
    }
}

pub fn format_substances(substances: &[&Substance]) -> String {
    if substances.is_empty() {
        return "No substances found.".into();
    }

    let name_width = substances
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(10)
        .max("Name".len());

    let mut out = String::new();
    out.push_str(&format!(
        "  {:>3}  {:<width$}  {:<14}  {:<7}  {:<14}  {:<8}  {:<8}\n",
        "ID",
        "Name",
        "Category",
        "Unit",
        "Therapeutic",
        "Toxic",
        "Lethal",
        width = name_width
    ));
    out.push_str(&format!("  {}\n", "-".repeat(name_width + 69)));

    for s in substances {
        out.push_str(&format!(
            "  {:>3}  {:<width$}  {:<14}  {:<7}  {:<14}  {:<8}  {:<8}\n",
            s.id,
            s.name,
            s.category.to_string(),
            s.dose_unit,
            range(s.therapeutic_dose_min, s.therapeutic_dose_max),
            show(s.toxic_dose),
            show(s.lethal_dose),
            width = name_width
        ));
    }

    out.trim_end().to_string()
}

pub fn format_substance(s: &Substance) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} (#{}, {})\n", s.name, s.id, s.category));
    if !s.common_names.is_empty() {
        out.push_str(&format!("  Also known as: {}\n", s.common_names.join(", ")));
    }
    if let Some(ref formula) = s.chemical_formula {
        out.push_str(&format!("  Formula:       {formula}\n"));
    }
    if let Some(ref cas) = s.cas_number {
        out.push_str(&format!("  CAS:           {cas}\n"));
    }
    if let Some(ref half_life) = s.half_life {
        out.push_str(&format!("  Half-life:     {half_life}\n"));
    }
    if let Some(ref window) = s.detection_window {
        out.push_str(&format!("  Detection:     {window}\n"));
    }
    if let Some(ref desc) = s.description {
        out.push_str(&format!("\n  {desc}\n"));
    }
    if let Some(ref moa) = s.mechanism_of_action {
        out.push_str(&format!("  Mechanism: {moa}\n"));
    }

    out.push_str(&format!("\n  Reference values ({}):\n", s.dose_unit));
    out.push_str(&format!(
        "    Therapeutic  {}\n",
        range(s.therapeutic_dose_min, s.therapeutic_dose_max)
    ));
    out.push_str(&format!("    Toxic        {}\n", show(s.toxic_dose)));
    out.push_str(&format!("    Lethal       {}\n", show(s.lethal_dose)));

    if !s.metabolites.is_empty() {
        out.push_str("\n  Metabolites:\n");
        for m in &s.metabolites {
            let active = if m.is_active { "active" } else { "inactive" };
            out.push_str(&format!("    {} ({})\n", m.name, active));
            if let Some(ref pathway) = m.formation_pathway {
                out.push_str(&format!("      Pathway:      {pathway}\n"));
            }
            if let Some(ref significance) = m.detection_significance {
                out.push_str(&format!("      Significance: {significance}\n"));
            }
            if m.therapeutic_range_min.is_some() || m.therapeutic_range_max.is_some() {
                out.push_str(&format!(
                    "      Therapeutic:  {} {}\n",
                    range(m.therapeutic_range_min, m.therapeutic_range_max),
                    m.unit
                ));
            }
            if let Some(toxic) = m.toxic_level {
                out.push_str(&format!(
                    "      Toxic:        {} {}\n",
                    toxic.normalize(),
                    m.unit
                ));
            }
        }
    }

    out.trim_end().to_string()
}

pub fn format_assessment(assessment: &DoseAssessment, verbose: bool) -> String {
    let r = &assessment.result;
    let mut out = format!(
        "  {}  {} {}  -> {}{}",
        r.substance_name,
        r.measured_level,
        r.unit,
        r.interpretation,
        marker(r.interpretation)
    );
    if verbose {
        out.push_str(&format!(
            "\n    {} (rule: {})",
            assessment.reason, assessment.rule
        ));
    }
    out
}

pub fn format_metabolite(result: &MetaboliteAnalysisResult, verbose: bool) -> String {
    let mut out = format!(
        "  {} [{}]  {} {}  -> {}{}",
        result.metabolite_name,
        result.substance_name,
        result.measured_level,
        result.unit,
        result.interpretation,
        marker(result.interpretation)
    );
    if verbose {
        out.push_str(&format!("\n    {} (rule: {})", result.reason, result.rule));
    }
    out
}
