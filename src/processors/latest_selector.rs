use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{CityHighlight, LatestReading, Sample, SeriesKey};
use crate::processors::classify;

/// Latest geolocated reading of every (city, pollutant) pair in the selection.
///
/// Samples outside the selection or without both coordinates are ignored.
/// Samples are stably sorted by timestamp and the last one per pair is taken,
/// so among identical timestamps the one given last wins.
///
/// Future-dated samples must already be gone; pass the samples of a
/// [`crate::models::Snapshot`].
pub fn latest_per_pair<S: AsRef<str>>(
    samples: &[Sample],
    selected_cities: &[S],
) -> Result<BTreeMap<SeriesKey, LatestReading>> {
    if selected_cities.is_empty() {
        return Err(ProcessingError::EmptySelection);
    }

    let selected: HashSet<&str> = selected_cities.iter().map(AsRef::as_ref).collect();

    let mut candidates: Vec<&Sample> = samples
        .iter()
        .filter(|sample| selected.contains(sample.city.as_str()))
        .filter(|sample| sample.location().is_some())
        .collect();
    candidates.sort_by_key(|sample| sample.timestamp);

    let mut latest: BTreeMap<SeriesKey, &Sample> = BTreeMap::new();
    for sample in candidates {
        latest.insert(sample.key(), sample);
    }

    let readings: BTreeMap<SeriesKey, LatestReading> = latest
        .into_iter()
        .filter_map(|(key, sample)| {
            LatestReading::from_sample(sample.clone()).map(|reading| (key, reading))
        })
        .collect();

    debug!(pairs = readings.len(), "Selected latest readings");
    Ok(readings)
}

/// NaN ranks below every real concentration.
fn severity(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}

/// Most severe latest reading per city.
///
/// A reading replaces the current pick only with a strictly greater value, so
/// on ties the first reading in pollutant order is kept.
pub fn city_highlight(
    latest: &BTreeMap<SeriesKey, LatestReading>,
) -> BTreeMap<String, CityHighlight> {
    let mut best: BTreeMap<&str, &LatestReading> = BTreeMap::new();

    for (key, reading) in latest {
        match best.get(key.city.as_str()) {
            Some(current) if severity(reading.value()) <= severity(current.value()) => {}
            _ => {
                best.insert(key.city.as_str(), reading);
            }
        }
    }

    best.into_iter()
        .map(|(city, reading)| {
            let category = classify(&reading.sample.pollutant, reading.value());
            (
                city.to_string(),
                CityHighlight {
                    reading: reading.clone(),
                    category,
                    color: category.color(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AqiCategory, Pollutant, Snapshot};
    use crate::utils::time::display_time;
    use pretty_assertions::assert_eq;

    const DELHI: (f64, f64) = (28.61, 77.21);
    const MUMBAI: (f64, f64) = (19.08, 72.88);

    fn located(city: &str, pollutant: Pollutant, hour: u32, value: f64, at: (f64, f64)) -> Sample {
        Sample::new(city, pollutant, display_time(2024, 11, 5, hour, 0), value)
            .with_location(at.0, at.1)
    }

    fn cities(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let samples = vec![located("Delhi", Pollutant::Pm25, 1, 10.0, DELHI)];
        let none: Vec<String> = Vec::new();

        let result = latest_per_pair(&samples, &none);
        assert!(matches!(result, Err(ProcessingError::EmptySelection)));
    }

    #[test]
    fn test_picks_max_timestamp_per_pair() {
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 9, 40.0, DELHI),
            located("Delhi", Pollutant::Pm25, 11, 70.0, DELHI),
            located("Delhi", Pollutant::Pm25, 10, 55.0, DELHI),
            located("Delhi", Pollutant::Pm10, 8, 120.0, DELHI),
        ];

        let latest = latest_per_pair(&samples, &cities(&["Delhi"])).unwrap();

        assert_eq!(latest.len(), 2);
        let pm25 = &latest[&SeriesKey::new("Delhi", Pollutant::Pm25)];
        assert_eq!(pm25.value(), 70.0);
        assert_eq!(pm25.sample.timestamp, display_time(2024, 11, 5, 11, 0));
    }

    #[test]
    fn test_identical_timestamps_keep_last_given() {
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 10, 40.0, DELHI),
            located("Delhi", Pollutant::Pm25, 10, 55.0, DELHI),
        ];

        let latest = latest_per_pair(&samples, &cities(&["Delhi"])).unwrap();
        assert_eq!(latest[&SeriesKey::new("Delhi", Pollutant::Pm25)].value(), 55.0);
    }

    #[test]
    fn test_unselected_and_unlocated_samples_are_ignored() {
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 9, 40.0, DELHI),
            // Newer but without coordinates
            Sample::new("Delhi", Pollutant::Pm25, display_time(2024, 11, 5, 12, 0), 99.0),
            located("Mumbai", Pollutant::Pm25, 9, 20.0, MUMBAI),
        ];

        let latest = latest_per_pair(&samples, &cities(&["Delhi"])).unwrap();

        assert_eq!(latest.len(), 1);
        assert_eq!(latest[&SeriesKey::new("Delhi", Pollutant::Pm25)].value(), 40.0);
    }

    #[test]
    fn test_never_returns_future_readings_from_snapshot() {
        let now = display_time(2024, 11, 5, 12, 0);
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 11, 40.0, DELHI),
            located("Delhi", Pollutant::Pm25, 13, 400.0, DELHI),
            located("Mumbai", Pollutant::Pm10, 23, 80.0, MUMBAI),
        ];
        let snapshot = Snapshot::new(samples, now);

        let latest = latest_per_pair(snapshot.samples(), &cities(&["Delhi", "Mumbai"])).unwrap();

        assert_eq!(latest.len(), 1);
        assert!(latest.values().all(|r| r.sample.timestamp <= now));
    }

    #[test]
    fn test_city_highlight_prefers_highest_value() {
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 10, 95.0, DELHI),
            located("Delhi", Pollutant::Pm10, 10, 40.0, DELHI),
        ];
        let latest = latest_per_pair(&samples, &cities(&["Delhi"])).unwrap();

        let highlights = city_highlight(&latest);

        assert_eq!(highlights.len(), 1);
        let delhi = &highlights["Delhi"];
        assert_eq!(delhi.reading.sample.pollutant, Pollutant::Pm25);
        assert_eq!(delhi.category, AqiCategory::VeryPoor);
        assert_eq!(delhi.color, "red");
    }

    #[test]
    fn test_city_highlight_value_dominates_city_readings() {
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 10, 35.0, DELHI),
            located("Delhi", Pollutant::Pm10, 10, 140.0, DELHI),
            located("Delhi", Pollutant::NitrogenDioxide, 10, 60.0, DELHI),
            located("Mumbai", Pollutant::Pm25, 10, 22.0, MUMBAI),
            located("Mumbai", Pollutant::Pm10, 10, 18.0, MUMBAI),
        ];
        let latest = latest_per_pair(&samples, &cities(&["Delhi", "Mumbai"])).unwrap();

        let highlights = city_highlight(&latest);

        assert_eq!(highlights.len(), 2);
        for (city, highlight) in &highlights {
            for (key, reading) in &latest {
                if &key.city == city {
                    assert!(highlight.reading.value() >= reading.value());
                }
            }
        }
        assert_eq!(highlights["Delhi"].category, AqiCategory::Poor);
        assert_eq!(highlights["Mumbai"].category, AqiCategory::Good);
    }

    #[test]
    fn test_city_highlight_tie_keeps_first_pollutant() {
        let samples = vec![
            located("Delhi", Pollutant::NitrogenDioxide, 10, 60.0, DELHI),
            located("Delhi", Pollutant::Pm10, 10, 60.0, DELHI),
        ];
        let latest = latest_per_pair(&samples, &cities(&["Delhi"])).unwrap();

        let highlights = city_highlight(&latest);
        // Pm10 orders before NitrogenDioxide
        assert_eq!(highlights["Delhi"].reading.sample.pollutant, Pollutant::Pm10);
        assert_eq!(highlights["Delhi"].category, AqiCategory::Moderate);
    }

    #[test]
    fn test_city_highlight_ranks_nan_lowest() {
        let samples = vec![
            located("Delhi", Pollutant::Pm25, 10, f64::NAN, DELHI),
            located("Delhi", Pollutant::Pm10, 10, 20.0, DELHI),
        ];
        let latest = latest_per_pair(&samples, &cities(&["Delhi"])).unwrap();

        let highlights = city_highlight(&latest);
        assert_eq!(highlights["Delhi"].reading.value(), 20.0);
    }
}
