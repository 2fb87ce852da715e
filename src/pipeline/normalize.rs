use crate::heuristics::{self, ProductAttributes};
use crate::tsv::RawRow;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::aggregate::AggregateKey;

/// How product names are turned into grouping keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Group on (sku, canonical name, grind type, package size).
    #[default]
    Attributes,
    /// Group on (sku, raw product name) with no extraction.
    Raw,
}

/// One validated unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    pub sku: String,
    pub raw_name: String,
    pub quantity: i64,
}

impl NormalizedLine {
    /// Build the grouping key for this line under `mode`.
    pub fn key(&self, mode: ExtractionMode) -> AggregateKey {
        match mode {
            ExtractionMode::Attributes => {
                let ProductAttributes {
                    canonical_name,
                    grind_type,
                    package_size,
                } = heuristics::extract_attributes(&self.raw_name);
                AggregateKey::Variant {
                    sku: self.sku.clone(),
                    canonical_name,
                    grind_type,
                    package_size,
                }
            }
            ExtractionMode::Raw => AggregateKey::Raw {
                sku: self.sku.clone(),
                raw_name: self.raw_name.clone(),
            },
        }
    }
}

/// Validate a row. `None` means the row is silently dropped.
pub fn normalize_row(row: &RawRow) -> Option<NormalizedLine> {
    let sku = row.get("sku").filter(|v| !v.is_empty())?;
    let raw_name = row.get("product-name").filter(|v| !v.is_empty())?;
    let quantity = parse_quantity(row.get("quantity-to-ship")?)?;

    Some(NormalizedLine {
        sku: sku.clone(),
        raw_name: raw_name.clone(),
        quantity,
    })
}

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("quantity regex"));

/// Lenient base-10 parse: leading whitespace and sign allowed, trailing
/// garbage ignored ("3 units" → 3, "2.9" → 2). Sign is passed through.
pub fn parse_quantity(text: &str) -> Option<i64> {
    let caps = LEADING_INT.captures(text)?;
    caps[1].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity("  12"), Some(12));
        assert_eq!(parse_quantity("3 units"), Some(3));
        assert_eq!(parse_quantity("2.9"), Some(2));
        assert_eq!(parse_quantity("-4"), Some(-4));
        assert_eq!(parse_quantity("+7"), Some(7));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("99999999999999999999999"), None);
    }

    #[test]
    fn test_valid_row() {
        let r = row(&[
            ("sku", "A1"),
            ("product-name", "House Blend"),
            ("quantity-to-ship", "3"),
        ]);
        assert_eq!(
            normalize_row(&r),
            Some(NormalizedLine {
                sku: "A1".to_string(),
                raw_name: "House Blend".to_string(),
                quantity: 3,
            })
        );
    }

    #[test]
    fn test_incomplete_rows_are_dropped() {
        let missing_sku = row(&[("product-name", "House Blend"), ("quantity-to-ship", "3")]);
        let empty_sku = row(&[("sku", ""), ("product-name", "House Blend"), ("quantity-to-ship", "3")]);
        let empty_name = row(&[("sku", "A1"), ("product-name", ""), ("quantity-to-ship", "3")]);
        let bad_qty = row(&[("sku", "A1"), ("product-name", "House Blend"), ("quantity-to-ship", "n/a")]);
        let no_qty = row(&[("sku", "A1"), ("product-name", "House Blend")]);

        for r in [missing_sku, empty_sku, empty_name, bad_qty, no_qty] {
            assert_eq!(normalize_row(&r), None);
        }
    }

    #[test]
    fn test_negative_quantity_passes_through() {
        let r = row(&[("sku", "A1"), ("product-name", "Blend"), ("quantity-to-ship", "-2")]);
        assert_eq!(normalize_row(&r).map(|l| l.quantity), Some(-2));
    }

    #[test]
    fn test_key_by_mode() {
        let line = NormalizedLine {
            sku: "A1".to_string(),
            raw_name: "Vendor Co, Dark Roast Fine Ground Coffee, Pack of 4".to_string(),
            quantity: 1,
        };

        assert_eq!(
            line.key(ExtractionMode::Attributes),
            AggregateKey::Variant {
                sku: "A1".to_string(),
                canonical_name: "Dark Roast".to_string(),
                grind_type: "Espresso Grind".to_string(),
                package_size: "4-Pack".to_string(),
            }
        );
        assert_eq!(
            line.key(ExtractionMode::Raw),
            AggregateKey::Raw {
                sku: "A1".to_string(),
                raw_name: line.raw_name.clone(),
            }
        );
    }
}
