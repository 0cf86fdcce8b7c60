pub mod csv_reader;
pub mod sqlite_reader;
pub mod store_row;

pub use csv_reader::CsvReader;
pub use sqlite_reader::SqliteReader;
pub use store_row::StoreRow;

use std::path::Path;

use crate::error::Result;
use crate::models::Sample;

/// Read the whole store at `path`: CSV exports by extension, SQLite otherwise.
pub fn read_store(path: &Path, table: &str) -> Result<Vec<Sample>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        CsvReader::new().read_samples(path)
    } else {
        SqliteReader::with_table(table).read_samples(path)
    }
}
