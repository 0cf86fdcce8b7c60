use chrono::Datelike;
use std::path::PathBuf;

use crate::utils::time::now_display;

/// Generate default dashboard export filename with format: aqi-dashboard-{YYMMDD}.json
pub fn generate_default_export_filename() -> PathBuf {
    let now = now_display();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("aqi-dashboard-{:02}{:02}{:02}.json", year, month, day);
    PathBuf::from("output").join(filename)
}
