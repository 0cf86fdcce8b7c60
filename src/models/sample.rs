use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::Pollutant;
use crate::utils::time::DisplayTime;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from optional store columns.
    ///
    /// Returns `Ok(None)` when either coordinate is missing and an error when
    /// both are present but not a usable position.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Option<Self>> {
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Ok(None);
        };

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "non-finite coordinate ({}, {})",
                latitude, longitude
            )));
        }

        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(Some(point))
    }
}

/// Identifies one time series: a city and a pollutant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesKey {
    pub city: String,
    pub pollutant: Pollutant,
}

impl SeriesKey {
    pub fn new(city: impl Into<String>, pollutant: Pollutant) -> Self {
        Self {
            city: city.into(),
            pollutant,
        }
    }
}

/// One observation, with its timestamp already in display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub city: String,
    pub pollutant: Pollutant,
    pub timestamp: DisplayTime,
    /// Concentration in µg/m³.
    pub value: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Sample {
    pub fn new(
        city: impl Into<String>,
        pollutant: Pollutant,
        timestamp: DisplayTime,
        value: f64,
    ) -> Self {
        Self {
            city: city.into(),
            pollutant,
            timestamp,
            value,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Position of the sample, if both coordinates are present.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn key(&self) -> SeriesKey {
        SeriesKey::new(self.city.clone(), self.pollutant.clone())
    }

    pub fn belongs_to(&self, key: &SeriesKey) -> bool {
        self.city == key.city && self.pollutant == key.pollutant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::display_time;

    #[test]
    fn test_geo_point_from_parts() {
        let point = GeoPoint::from_parts(Some(28.61), Some(77.21)).unwrap();
        assert_eq!(point, Some(GeoPoint::new(28.61, 77.21)));

        assert!(GeoPoint::from_parts(None, Some(77.21)).unwrap().is_none());
        assert!(GeoPoint::from_parts(Some(28.61), None).unwrap().is_none());
    }

    #[test]
    fn test_geo_point_rejects_invalid_positions() {
        assert!(GeoPoint::from_parts(Some(91.0), Some(77.21)).is_err());
        assert!(GeoPoint::from_parts(Some(28.61), Some(-181.0)).is_err());
        assert!(GeoPoint::from_parts(Some(f64::NAN), Some(77.21)).is_err());
    }

    #[test]
    fn test_sample_location_requires_both_coordinates() {
        let ts = display_time(2024, 11, 5, 10, 0);
        let sample = Sample::new("Delhi", Pollutant::Pm25, ts, 40.0);
        assert!(sample.location().is_none());

        let mut partial = sample.clone();
        partial.latitude = Some(28.61);
        assert!(partial.location().is_none());

        let located = sample.with_location(28.61, 77.21);
        assert_eq!(located.location(), Some(GeoPoint::new(28.61, 77.21)));
    }

    #[test]
    fn test_sample_key() {
        let ts = display_time(2024, 11, 5, 10, 0);
        let sample = Sample::new("Mumbai", Pollutant::Pm10, ts, 80.0);
        let key = SeriesKey::new("Mumbai", Pollutant::Pm10);

        assert_eq!(sample.key(), key);
        assert!(sample.belongs_to(&key));
        assert!(!sample.belongs_to(&SeriesKey::new("Delhi", Pollutant::Pm10)));
    }
}
