use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pharmaceutical,
    Narcotic,
    Synthetic,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Pharmaceutical => write!(f, "pharmaceutical"),
            Category::Narcotic => write!(f, "narcotic"),
            Category::Synthetic => write!(f, "synthetic"),
        }
    }
}

impl Category {
    pub fn from_str_loose(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "pharmaceutical" | "pharma" => Some(Category::Pharmaceutical),
            "narcotic" | "narcotics" => Some(Category::Narcotic),
            "synthetic" | "synthetics" => Some(Category::Synthetic),
            _ => None,
        }
    }
}

/// Qualitative reading of a measured level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interpretation {
    #[serde(rename = "Sub-therapeutic")]
    SubTherapeutic,
    Therapeutic,
    Toxic,
    Lethal,
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::SubTherapeutic => write!(f, "Sub-therapeutic"),
            Interpretation::Therapeutic => write!(f, "Therapeutic"),
            Interpretation::Toxic => write!(f, "Toxic"),
            Interpretation::Lethal => write!(f, "Lethal"),
        }
    }
}

fn default_dose_unit() -> String {
    "mg/L".into()
}

fn default_metabolite_unit() -> String {
    "ng/mL".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metabolite {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_formula: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_pathway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapeutic_range_min: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapeutic_range_max: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toxic_level: Option<Decimal>,
    #[serde(default = "default_metabolite_unit")]
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substance {
    pub id: u32,
    pub name: String,
    /// Trade and street names.
    #[serde(default)]
    pub common_names: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism_of_action: Option<String>,
    #[serde(default = "default_dose_unit")]
    pub dose_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapeutic_dose_min: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapeutic_dose_max: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toxic_dose: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lethal_dose: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_life: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_window: Option<String>,
    #[serde(default)]
    pub metabolites: Vec<Metabolite>,
}

impl Substance {
    /// Find a metabolite by name (case-insensitive).
    pub fn metabolite(&self, name: &str) -> Option<&Metabolite> {
        let wanted = name.trim().to_lowercase();
        self.metabolites
            .iter()
            .find(|m| m.name.to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseAnalysisRequest {
    /// Signed so that ids no catalog can hold still resolve to `not_found`.
    pub substance_id: i64,
    pub measured_level: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretation_labels() {
        let json = serde_json::to_string(&Interpretation::SubTherapeutic).unwrap();
        assert_eq!(json, "\"Sub-therapeutic\"");
        assert_eq!(Interpretation::Lethal.to_string(), "Lethal");
        assert!(Interpretation::Lethal > Interpretation::Toxic);
        assert!(Interpretation::Toxic > Interpretation::Therapeutic);
    }

    #[test]
    fn test_category_loose() {
        assert_eq!(
            Category::from_str_loose(" Narcotic "),
            Some(Category::Narcotic)
        );
        assert_eq!(Category::from_str_loose("plant"), None);
    }

    #[test]
    fn test_substance_defaults() {
        let json = r#"{ "id": 1, "name": "X", "category": "synthetic" }"#;
        let s: Substance = serde_json::from_str(json).unwrap();
        assert_eq!(s.dose_unit, "mg/L");
        assert!(s.metabolites.is_empty());
        assert!(s.toxic_dose.is_none());
    }
}
