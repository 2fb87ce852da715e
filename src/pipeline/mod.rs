// src/pipeline/mod.rs

pub mod aggregate;
pub mod normalize;
pub mod schema;

use crate::error::PipelineError;
use crate::tsv::{RowTable, TsvReader};
use aggregate::{Aggregator, PickListEntry};
use normalize::{ExtractionMode, normalize_row};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of one successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickList {
    pub items: Vec<PickListEntry>,
    pub order_ids: Vec<String>,
}

impl PickList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|e| e.total_quantity).sum()
    }
}

/// Schema check → normalize → aggregate over one report.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    mode: ExtractionMode,
    delimiter: Option<u8>,
}

impl Pipeline {
    pub fn new(mode: ExtractionMode) -> Self {
        Self {
            mode,
            delimiter: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Tokenize raw report bytes, then run.
    pub fn run_bytes(&self, input: &[u8]) -> Result<PickList, PipelineError> {
        let mut reader = TsvReader::new();
        if let Some(d) = self.delimiter {
            reader = reader.with_delimiter(d);
        }
        let table = reader.read(input).map_err(|e| PipelineError::Parse {
            message: e.to_string(),
        })?;
        self.run(&table)
    }

    /// Run over an already tokenized report.
    pub fn run(&self, table: &RowTable) -> Result<PickList, PipelineError> {
        let missing = schema::missing_headers(table.headers.as_slice());
        if !missing.is_empty() {
            warn!(missing = ?missing, "Report is missing required headers");
            return Err(PipelineError::Schema { missing });
        }

        let mut agg = Aggregator::new();
        let mut dropped = 0usize;

        for (index, row) in table.rows.iter().enumerate() {
            agg.observe_order(row);

            let Some(line) = normalize_row(row) else {
                debug!(row = index + 1, "Dropping incomplete row");
                dropped += 1;
                continue;
            };
            agg.add(line.key(self.mode), line.quantity);
        }

        if agg.is_empty() {
            warn!(rows = table.rows.len(), "No rows survived normalization");
        }
        let entries = agg.len();
        let (items, order_ids) = agg.finish();
        let pick_list = PickList { items, order_ids };

        info!(
            mode = ?self.mode,
            rows = table.rows.len(),
            dropped,
            entries,
            units = pick_list.total_units(),
            orders = pick_list.order_ids.len(),
            "Pick list built"
        );

        Ok(pick_list)
    }
}
