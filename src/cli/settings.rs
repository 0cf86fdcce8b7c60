use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::models::Pollutant;
use crate::utils::constants::{
    DEFAULT_CITIES, DEFAULT_CONFIG_FILE, DEFAULT_DATABASE, DEFAULT_TABLE, ENV_PREFIX,
};

/// Layered settings: defaults, then a TOML file, then `AQI_DASHBOARD_*` variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Store location; a `.csv` path is read as a CSV export.
    pub database: PathBuf,
    pub table: String,
    /// Default city selection.
    pub cities: Vec<String>,
    /// Pollutants charted per city, in panel order.
    pub pollutants: Vec<Pollutant>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            table: DEFAULT_TABLE.to_string(),
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            pollutants: Pollutant::CHARTED.to_vec(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let settings: Settings = Config::builder()
            .set_default("database", defaults.database.to_string_lossy().to_string())?
            .set_default("table", defaults.table)?
            .set_default("cities", defaults.cities)?
            .set_default(
                "pollutants",
                defaults
                    .pollutants
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>(),
            )?
            .add_source(File::from(file.as_path()).required(path.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cities")
                    .with_list_parse_key("pollutants"),
            )
            .build()?
            .try_deserialize()?;

        debug!(?settings, file = %file.display(), "Loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.database, PathBuf::from("air_quality.db"));
        assert_eq!(settings.table, "air_quality");
        assert_eq!(settings.cities, vec!["Delhi", "Mumbai", "Bengaluru", "Kolkata"]);
        assert_eq!(settings.pollutants.len(), 3);
    }

    #[test]
    fn test_file_overrides_defaults() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "database = \"data/readings.db\"")?;
        writeln!(file, "cities = [\"Delhi\", \"Chennai\"]")?;
        writeln!(file, "pollutants = [\"pm10\", \"ozone\"]")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.database, PathBuf::from("data/readings.db"));
        assert_eq!(settings.table, "air_quality");
        assert_eq!(settings.cities, vec!["Delhi", "Chennai"]);
        assert_eq!(
            settings.pollutants,
            vec![Pollutant::Pm10, Pollutant::Other("ozone".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/aqi-dashboard.toml")));
        assert!(result.is_err());
    }
}
