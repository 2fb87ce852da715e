// src/tsv.rs

use csv::ReaderBuilder;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// One data row: lower-cased header name → raw field value.
pub type RawRow = HashMap<String, String>;

/// A fully tokenized report.
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    /// Header names as they appeared in the file.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Error, Debug)]
pub enum TsvError {
    #[error("failed to read header row: {0}")]
    Header(#[source] csv::Error),

    #[error("failed to read record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: csv::Error,
    },
}

/// Tokenizer for delimited order reports. The first row is the header row.
pub struct TsvReader {
    delimiter: u8,
}

impl Default for TsvReader {
    fn default() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl TsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse the whole input into headers plus row mappings.
    pub fn read(&self, input: &[u8]) -> Result<RowTable, TsvError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true) // short trailing rows are common in exports
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(TsvError::Header)?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let keys: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|source| TsvError::Record {
                index: index + 1,
                source,
            })?;

            let row: RawRow = keys
                .iter()
                .zip(record.iter())
                .map(|(k, v)| (k.clone(), v.to_string()))
                .collect();
            rows.push(row);
        }

        debug!(headers = headers.len(), rows = rows.len(), "Tokenized report");
        Ok(RowTable { headers, rows })
    }
}
