use crate::model::Substance;
use serde::{Deserialize, Serialize};

/// A reference dataset of substances and their metabolites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Substances in display order.
    pub substances: Vec<Substance>,
}

/// Read access to substance reference data.
///
/// The classifier only reads through this trait, so any source of reference
/// data (embedded JSON, a file, a database-backed service) can stand behind it.
pub trait SubstanceCatalog {
    /// Look up a substance by its identifier.
    fn get(&self, id: u32) -> Option<&Substance>;

    /// All substances, in catalog order.
    fn substances(&self) -> &[Substance];
}

impl SubstanceCatalog for Catalog {
    fn get(&self, id: u32) -> Option<&Substance> {
        self.substances.iter().find(|s| s.id == id)
    }

    fn substances(&self) -> &[Substance] {
        &self.substances
    }
}
