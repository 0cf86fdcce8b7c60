/// Display timezone (IST, fixed offset, no daylight saving)
pub const DISPLAY_TIMEZONE_NAME: &str = "Asia/Kolkata";
pub const DISPLAY_TIMEZONE_ABBREVIATION: &str = "IST";
pub const DISPLAY_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Store defaults
pub const DEFAULT_DATABASE: &str = "air_quality.db";
pub const DEFAULT_TABLE: &str = "air_quality";
pub const STORE_COLUMNS: [&str; 6] = [
    "city",
    "pollutant",
    "datetime_utc",
    "value",
    "latitude",
    "longitude",
];

/// Cities selected when no selection is given
pub const DEFAULT_CITIES: [&str; 4] = ["Delhi", "Mumbai", "Bengaluru", "Kolkata"];

/// Settings sources
pub const DEFAULT_CONFIG_FILE: &str = "aqi-dashboard.toml";
pub const ENV_PREFIX: &str = "AQI_DASHBOARD";

/// Map view used before any marker is placed (central India)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (22.5, 80.9);
pub const DEFAULT_MAP_ZOOM: u8 = 5;

/// Rendering
pub const CONCENTRATION_UNIT: &str = "µg/m³";
pub const AXIS_TIME_FORMAT: &str = "%d %b %H:%M";
pub const NO_DATA_LABEL: &str = "No data";
