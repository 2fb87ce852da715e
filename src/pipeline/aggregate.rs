use crate::tsv::RawRow;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Identity of one pick-list line. Equal keys are summed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum AggregateKey {
    Variant {
        sku: String,
        canonical_name: String,
        grind_type: String,
        package_size: String,
    },
    Raw {
        sku: String,
        raw_name: String,
    },
}

/// One output row of the pick list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickListEntry {
    #[serde(flatten)]
    pub key: AggregateKey,
    pub total_quantity: i64,
}

/// Folds lines into entries in first-seen order and collects distinct
/// order ids. Lives for exactly one run.
#[derive(Debug, Default)]
pub struct Aggregator {
    totals: IndexMap<AggregateKey, i64>,
    order_ids: IndexSet<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: AggregateKey, quantity: i64) {
        let total = self.totals.entry(key).or_insert(0);
        *total = total.saturating_add(quantity);
    }

    /// Record the row's order id if it has a non-empty one. Called for
    /// every row, including rows the normalizer drops.
    pub fn observe_order(&mut self, row: &RawRow) {
        if let Some(id) = row.get("order-id").filter(|id| !id.is_empty()) {
            // no-op for an id already seen, so first-seen order holds
            self.order_ids.insert(id.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn finish(self) -> (Vec<PickListEntry>, Vec<String>) {
        let entries = self
            .totals
            .into_iter()
            .map(|(key, total_quantity)| PickListEntry {
                key,
                total_quantity,
            })
            .collect();
        (entries, self.order_ids.into_iter().collect())
    }
}
