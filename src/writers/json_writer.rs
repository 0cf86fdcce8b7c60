use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::DashboardState;

/// Serialises dashboard state for external chart and map renderers.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, state: &DashboardState) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(state)?
        } else {
            serde_json::to_string(state)?
        };
        Ok(json)
    }

    pub fn write_to<W: Write>(&self, state: &DashboardState, writer: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(writer, state)?;
        } else {
            serde_json::to_writer(writer, state)?;
        }
        Ok(())
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn write_file(&self, state: &DashboardState, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(state, &mut writer)?;
        writer.flush()?;

        info!(path = %path.display(), "Wrote dashboard JSON");
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
