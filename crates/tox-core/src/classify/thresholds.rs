use crate::error::ToxError;
use crate::model::{Metabolite, Substance};
use rust_decimal::Decimal;
use std::fmt;

/// Reference thresholds for one substance or metabolite.
///
/// Any bound may be absent. Present bounds must be non-negative and ordered
/// `therapeutic_min <= therapeutic_max <= toxic <= lethal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thresholds {
    pub therapeutic_min: Option<Decimal>,
    pub therapeutic_max: Option<Decimal>,
    pub toxic: Option<Decimal>,
    pub lethal: Option<Decimal>,
}

impl Thresholds {
    pub fn of_substance(substance: &Substance) -> Self {
        Thresholds {
            therapeutic_min: substance.therapeutic_dose_min,
            therapeutic_max: substance.therapeutic_dose_max,
            toxic: substance.toxic_dose,
            lethal: substance.lethal_dose,
        }
    }

    /// Metabolites have no lethal level.
    pub fn of_metabolite(metabolite: &Metabolite) -> Self {
        Thresholds {
            therapeutic_min: metabolite.therapeutic_range_min,
            therapeutic_max: metabolite.therapeutic_range_max,
            toxic: metabolite.toxic_level,
            lethal: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.therapeutic_min.is_none()
            && self.therapeutic_max.is_none()
            && self.toxic.is_none()
            && self.lethal.is_none()
    }

    /// Present bounds in severity order, labelled for messages.
    fn chain(&self) -> Vec<(&'static str, Decimal)> {
        [
            ("therapeutic_min", self.therapeutic_min),
            ("therapeutic_max", self.therapeutic_max),
            ("toxic", self.toxic),
            ("lethal", self.lethal),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// Check that bounds are non-negative and ordered.
    pub fn validate(&self, name: &str) -> Result<(), ToxError> {
        let chain = self.chain();

        if let Some((label, value)) = chain.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(ToxError::MisconfiguredThresholds {
                name: name.to_string(),
                reason: format!("{label} {value} is negative"),
            });
        }

        for pair in chain.windows(2) {
            let (lower_label, lower) = pair[0];
            let (upper_label, upper) = pair[1];
            if upper < lower {
                return Err(ToxError::MisconfiguredThresholds {
                    name: name.to_string(),
                    reason: format!("{upper_label} {upper} < {lower_label} {lower}"),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no thresholds");
        }
        let parts: Vec<String> = self
            .chain()
            .iter()
            .map(|(label, value)| format!("{label}:{}", value.normalize()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn thresholds(
        min: Option<Decimal>,
        max: Option<Decimal>,
        toxic: Option<Decimal>,
        lethal: Option<Decimal>,
    ) -> Thresholds {
        Thresholds {
            therapeutic_min: min,
            therapeutic_max: max,
            toxic,
            lethal,
        }
    }

    #[test]
    fn test_ordered_thresholds_valid() {
        let t = thresholds(Some(dec!(10)), Some(dec!(50)), Some(dec!(100)), Some(dec!(200)));
        assert!(t.validate("X").is_ok());
    }

    #[test]
    fn test_equal_neighbours_valid() {
        // Fentanyl: therapeutic ceiling equals toxic threshold
        let t = thresholds(
            Some(dec!(0.001)),
            Some(dec!(0.01)),
            Some(dec!(0.01)),
            Some(dec!(0.02)),
        );
        assert!(t.validate("Fentanyl").is_ok());
    }

    #[test]
    fn test_gaps_skipped() {
        let t = thresholds(None, None, Some(dec!(0.5)), Some(dec!(5)));
        assert!(t.validate("Cocaine").is_ok());
        let t = thresholds(Some(dec!(1)), None, None, Some(dec!(5)));
        assert!(t.validate("X").is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let t = thresholds(Some(dec!(50)), Some(dec!(10)), None, None);
        let err = t.validate("X").unwrap_err();
        assert!(matches!(err, ToxError::MisconfiguredThresholds { .. }));
        assert!(err.to_string().contains("therapeutic_max 10 < therapeutic_min 50"));
    }

    #[test]
    fn test_lethal_below_toxic_rejected() {
        let t = thresholds(None, None, Some(dec!(5)), Some(dec!(1)));
        assert!(t.validate("X").is_err());
    }

    #[test]
    fn test_toxic_below_therapeutic_max_rejected() {
        let t = thresholds(Some(dec!(1)), Some(dec!(10)), Some(dec!(5)), None);
        assert!(t.validate("X").is_err());
    }

    #[test]
    fn test_negative_rejected() {
        let t = thresholds(Some(dec!(-1)), Some(dec!(10)), None, None);
        let err = t.validate("X").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Thresholds::default().to_string(), "no thresholds");
        let t = thresholds(None, None, Some(dec!(0.50)), Some(dec!(5)));
        assert_eq!(t.to_string(), "toxic:0.5, lethal:5");
    }
}
