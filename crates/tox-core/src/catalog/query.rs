use crate::catalog::schema::SubstanceCatalog;
use crate::model::{Category, Substance};

/// Filter for listing substances.
///
/// An empty query matches everything. `search` is matched case-insensitively
/// against the name, common names and description.
#[derive(Debug, Clone, Default)]
pub struct SubstanceQuery {
    pub category: Option<Category>,
    pub search: Option<String>,
}

impl SubstanceQuery {
    pub fn matches(&self, substance: &Substance) -> bool {
        if let Some(category) = self.category {
            if substance.category != category {
                return false;
            }
        }

        let needle = match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return true,
        };

        substance.name.to_lowercase().contains(&needle)
            || substance
                .common_names
                .iter()
                .any(|n| n.to_lowercase().contains(&needle))
            || substance
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Substances matching `query`, in catalog order.
pub fn find<'a>(catalog: &'a dyn SubstanceCatalog, query: &SubstanceQuery) -> Vec<&'a Substance> {
    catalog
        .substances()
        .iter()
        .filter(|s| query.matches(s))
        .collect()
}

/// Distinct categories present in the catalog, in first-seen order.
pub fn categories(catalog: &dyn SubstanceCatalog) -> Vec<Category> {
    let mut seen = Vec::new();
    for substance in catalog.substances() {
        if !seen.contains(&substance.category) {
            seen.push(substance.category);
        }
    }
    seen
}
