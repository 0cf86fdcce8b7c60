use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ProcessingError, Result};
use crate::models::Sample;
use crate::readers::store_row::{collect_samples, StoreRow};
use crate::utils::constants::{DEFAULT_TABLE, STORE_COLUMNS};

/// Reads samples from the local SQLite store.
///
/// Every call opens its own read-only connection and closes it before
/// returning; nothing is held between refreshes.
pub struct SqliteReader {
    table: String,
}

impl SqliteReader {
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Read the whole sample table.
    pub fn read_samples(&self, path: &Path) -> Result<Vec<Sample>> {
        validate_table_name(&self.table)?;

        if !path.exists() {
            return Err(ProcessingError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Store not found: {}", path.display()),
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), table = %self.table, "Opened store");

        let rows = self.query_rows(&conn)?;
        conn.close().map_err(|(_, e)| e)?;

        info!(rows = rows.len(), path = %path.display(), "Read store");
        collect_samples(rows)
    }

    fn query_rows(&self, conn: &Connection) -> Result<Vec<StoreRow>> {
        let sql = format!(
            "SELECT {} FROM \"{}\"",
            STORE_COLUMNS.join(", "),
            self.table
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoreRow {
                    city: row.get(0)?,
                    pollutant: row.get(1)?,
                    datetime_utc: row.get(2)?,
                    value: row.get(3)?,
                    latitude: row.get(4)?,
                    longitude: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl Default for SqliteReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Table names are spliced into SQL, so only plain identifiers are allowed.
fn validate_table_name(table: &str) -> Result<()> {
    let mut chars = table.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ProcessingError::Config(format!(
            "Invalid table name: '{}'",
            table
        )))
    }
}
