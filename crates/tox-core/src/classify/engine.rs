use crate::classify::outcome::{DoseAnalysisResult, DoseAssessment, MetaboliteAnalysisResult};
use crate::classify::rules::{self, Rule};
use crate::classify::thresholds::Thresholds;
use crate::error::ToxError;
use crate::model::{Metabolite, Substance};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Interpret a measured level of a substance.
pub fn classify(
    substance: &Substance,
    measured_level: f64,
) -> Result<DoseAnalysisResult, ToxError> {
    assess(substance, measured_level).map(|a| a.result)
}

/// Interpret a measured level of a substance, reporting the rule that fired.
pub fn assess(substance: &Substance, measured_level: f64) -> Result<DoseAssessment, ToxError> {
    let level = parse_level(measured_level)?;
    let thresholds = Thresholds::of_substance(substance);
    thresholds.validate(&substance.name)?;

    let rule = interpret(&thresholds, level);
    debug!(
        substance = %substance.name,
        level = %level,
        rule = rule.name,
        interpretation = %rule.interpretation,
        "classified measured level"
    );

    Ok(DoseAssessment {
        result: DoseAnalysisResult {
            substance_name: substance.name.clone(),
            measured_level,
            unit: substance.dose_unit.clone(),
            interpretation: rule.interpretation,
        },
        rule: rule.name.to_string(),
        reason: format!(
            "{}: {} {} {} -> {}",
            substance.name,
            level.normalize(),
            substance.dose_unit,
            rule.describe(&thresholds),
            rule.interpretation
        ),
    })
}

/// Interpret a measured level of one of a substance's metabolites.
///
/// Metabolites carry no lethal level, so the result is never `Lethal`.
pub fn classify_metabolite(
    substance: &Substance,
    metabolite: &Metabolite,
    measured_level: f64,
) -> Result<MetaboliteAnalysisResult, ToxError> {
    let level = parse_level(measured_level)?;
    let thresholds = Thresholds::of_metabolite(metabolite);
    thresholds.validate(&metabolite.name)?;

    let rule = interpret(&thresholds, level);
    debug!(
        substance = %substance.name,
        metabolite = %metabolite.name,
        level = %level,
        rule = rule.name,
        "classified metabolite level"
    );

    Ok(MetaboliteAnalysisResult {
        substance_name: substance.name.clone(),
        metabolite_name: metabolite.name.clone(),
        measured_level,
        unit: metabolite.unit.clone(),
        interpretation: rule.interpretation,
        rule: rule.name.to_string(),
        reason: format!(
            "{}: {} {} {} -> {}",
            metabolite.name,
            level.normalize(),
            metabolite.unit,
            rule.describe(&thresholds),
            rule.interpretation
        ),
    })
}

/// Pick the interpretation rule for an already-validated level.
pub fn interpret(thresholds: &Thresholds, level: Decimal) -> &'static Rule {
    rules::first_match(thresholds, level)
}

/// Convert a wire level to an exact decimal, rejecting non-finite and negative input.
///
/// The conversion goes through the shortest round-trip text of the `f64`, so a
/// level just below a threshold never rounds up onto it.
pub fn parse_level(measured_level: f64) -> Result<Decimal, ToxError> {
    if !measured_level.is_finite() {
        return Err(ToxError::InvalidInput(format!(
            "measured level must be a finite number, got {measured_level}"
        )));
    }
    if measured_level < 0.0 {
        return Err(ToxError::InvalidInput(format!(
            "measured level must not be negative, got {measured_level}"
        )));
    }
    match Decimal::from_str(&measured_level.to_string()) {
        Ok(level) => Ok(level),
        // Beyond the decimal range, and so above any threshold a catalog can hold
        Err(_) if measured_level >= 1.0 => Ok(Decimal::MAX),
        // More fractional digits than a decimal carries
        Err(_) => Ok(Decimal::from_f64(measured_level).unwrap_or(Decimal::ZERO)),
    }
}
