//! Ordered interpretation rules.
//!
//! Rules are evaluated top to bottom and the first match wins, so more
//! severe readings always take precedence over overlapping milder ones.
//! The last rule always matches.

use crate::classify::thresholds::Thresholds;
use crate::model::Interpretation;
use rust_decimal::Decimal;
use std::fmt;

/// A single entry in the interpretation table.
pub struct Rule {
    /// Stable identifier, reported alongside results.
    pub name: &'static str,
    pub interpretation: Interpretation,
    matches: fn(&Thresholds, Decimal) -> bool,
    describe: fn(&Thresholds) -> String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("interpretation", &self.interpretation)
            .finish()
    }
}

impl Rule {
    pub fn matches(&self, thresholds: &Thresholds, level: Decimal) -> bool {
        (self.matches)(thresholds, level)
    }

    /// The condition this rule checks, rendered against `thresholds`.
    pub fn describe(&self, thresholds: &Thresholds) -> String {
        (self.describe)(thresholds)
    }
}

fn show(value: Option<Decimal>) -> String {
    value
        .map(|v| v.normalize().to_string())
        .unwrap_or_else(|| "-".into())
}

const DEFAULT: Rule = Rule {
    name: "default",
    interpretation: Interpretation::Therapeutic,
    matches: |_, _| true,
    describe: |t| format!("matches no threshold ({t})"),
};

pub static RULES: [Rule; 6] = [
    Rule {
        name: "lethal",
        interpretation: Interpretation::Lethal,
        matches: |t, level| t.lethal.is_some_and(|l| level >= l),
        describe: |t| format!(">= lethal {}", show(t.lethal)),
    },
    Rule {
        name: "toxic",
        interpretation: Interpretation::Toxic,
        matches: |t, level| t.toxic.is_some_and(|x| level >= x),
        describe: |t| format!(">= toxic {}", show(t.toxic)),
    },
    // No supratherapeutic category: anything above the therapeutic ceiling
    // but below the toxic threshold reads as toxic.
    Rule {
        name: "above-therapeutic",
        interpretation: Interpretation::Toxic,
        matches: |t, level| t.therapeutic_max.is_some_and(|max| level > max),
        describe: |t| format!("> therapeutic max {}", show(t.therapeutic_max)),
    },
    Rule {
        name: "therapeutic-range",
        interpretation: Interpretation::Therapeutic,
        matches: |t, level| {
            (t.therapeutic_min.is_some() || t.therapeutic_max.is_some())
                && t.therapeutic_min.map_or(true, |min| level >= min)
                && t.therapeutic_max.map_or(true, |max| level <= max)
        },
        describe: |t| {
            format!(
                "within therapeutic range [{}, {}]",
                show(t.therapeutic_min),
                show(t.therapeutic_max)
            )
        },
    },
    Rule {
        name: "below-therapeutic",
        interpretation: Interpretation::SubTherapeutic,
        matches: |t, level| t.therapeutic_min.is_some_and(|min| level < min),
        describe: |t| format!("< therapeutic min {}", show(t.therapeutic_min)),
    },
    DEFAULT,
];

/// Return the first rule matching `level`.
pub fn first_match(thresholds: &Thresholds, level: Decimal) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.matches(thresholds, level))
        .unwrap_or(&RULES[RULES.len() - 1])
}
