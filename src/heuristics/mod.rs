// src/heuristics/mod.rs

mod coffee;

use serde::Deserialize;
use serde::Serialize;

/// Structured attributes derived from a free-text product name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributes {
    /// Product label with packaging and grind phrases stripped.
    pub canonical_name: String,
    /// "Whole Bean", "Medium Grind", "Espresso Grind", or empty.
    pub grind_type: String,
    /// e.g. "12 oz", "2 lb", "5-Pack", or empty.
    pub package_size: String,
}

/// Extract product attributes from a raw catalog product name.
///
/// Never fails: anything unrecognised comes back as an empty string.
pub fn extract_attributes(raw_name: &str) -> ProductAttributes {
    coffee::extract(raw_name)
}
