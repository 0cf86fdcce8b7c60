use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{GeoPoint, Pollutant, Sample};
use crate::utils::time::{parse_utc_timestamp, to_display_time};

/// One row of the flat store table, before any interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRow {
    pub city: String,
    pub pollutant: String,
    pub datetime_utc: String,
    pub value: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StoreRow {
    /// Interpret the row as a sample in display time.
    ///
    /// Rows without a value yield `Ok(None)`. An unparseable timestamp is an
    /// error. Coordinates that are not a valid position are dropped, leaving
    /// the sample chartable but off the map.
    pub fn into_sample(self) -> Result<Option<Sample>> {
        let Some(value) = self.value else {
            return Ok(None);
        };

        let timestamp = to_display_time(parse_utc_timestamp(&self.datetime_utc)?);
        let location = GeoPoint::from_parts(self.latitude, self.longitude).unwrap_or_else(|e| {
            warn!(city = %self.city, error = %e, "Ignoring invalid coordinates");
            None
        });

        let sample = Sample::new(self.city, Pollutant::from(self.pollutant), timestamp, value);
        Ok(Some(match location {
            Some(point) => sample.with_location(point.latitude, point.longitude),
            None => sample,
        }))
    }
}

/// Convert store rows to samples, skipping rows without a value.
pub fn collect_samples<I>(rows: I) -> Result<Vec<Sample>>
where
    I: IntoIterator<Item = StoreRow>,
{
    let mut samples = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        match row.into_sample()? {
            Some(sample) => samples.push(sample),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        info!(skipped, "Skipped rows without a value");
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn row(datetime_utc: &str, value: Option<f64>, lat: Option<f64>, lon: Option<f64>) -> StoreRow {
        StoreRow {
            city: "Delhi".to_string(),
            pollutant: "pm2_5".to_string(),
            datetime_utc: datetime_utc.to_string(),
            value,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_row_converts_to_display_time() {
        let sample = row("2024-11-05 10:00:00+00:00", Some(55.0), Some(28.61), Some(77.21))
            .into_sample()
            .unwrap()
            .unwrap();

        assert_eq!(sample.pollutant, Pollutant::Pm25);
        assert_eq!(sample.timestamp.hour(), 15);
        assert_eq!(sample.timestamp.minute(), 30);
        assert_eq!(sample.location(), Some(GeoPoint::new(28.61, 77.21)));
    }

    #[test]
    fn test_row_without_value_is_skipped() {
        assert!(row("2024-11-05 10:00:00", None, None, None)
            .into_sample()
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_bad_timestamp_is_an_error() {
        assert!(row("not a time", Some(1.0), None, None).into_sample().is_err());
    }

    #[test]
    fn test_invalid_coordinates_are_dropped() {
        let sample = row("2024-11-05 10:00:00", Some(55.0), Some(128.61), Some(77.21))
            .into_sample()
            .unwrap()
            .unwrap();

        assert!(sample.location().is_none());
        assert_eq!(sample.value, 55.0);
    }

    #[test]
    fn test_collect_samples_counts_only_valued_rows() {
        let samples = collect_samples(vec![
            row("2024-11-05 10:00:00", Some(55.0), None, None),
            row("2024-11-05 11:00:00", None, None, None),
        ])
        .unwrap();

        assert_eq!(samples.len(), 1);
    }
}
