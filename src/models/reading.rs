use serde::Serialize;

use crate::models::{AqiCategory, GeoPoint, Sample};

/// The most recent geolocated sample of one (city, pollutant) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestReading {
    pub sample: Sample,
    pub location: GeoPoint,
}

impl LatestReading {
    /// `None` when the sample has no usable location.
    pub fn from_sample(sample: Sample) -> Option<Self> {
        let location = sample.location()?;
        Some(Self { sample, location })
    }

    pub fn value(&self) -> f64 {
        self.sample.value
    }
}

/// The single most severe latest reading of a city, drawn as its map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityHighlight {
    pub reading: LatestReading,
    pub category: AqiCategory,
    pub color: &'static str,
}

impl CityHighlight {
    pub fn city(&self) -> &str {
        &self.reading.sample.city
    }

    pub fn location(&self) -> GeoPoint {
        self.reading.location
    }
}
