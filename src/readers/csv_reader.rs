use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::Sample;
use crate::readers::store_row::{collect_samples, StoreRow};

/// Reads samples from a CSV export of the store table.
///
/// The file needs a header row naming the store columns; column order and
/// extra columns do not matter.
pub struct CsvReader {
    delimiter: u8,
}

impl CsvReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_samples(&self, path: &Path) -> Result<Vec<Sample>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let rows = reader
            .deserialize::<StoreRow>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(rows = rows.len(), path = %path.display(), "Read CSV store");
        collect_samples(rows)
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}
