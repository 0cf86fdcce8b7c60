use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{Sample, Series, SeriesKey};

/// Reduce raw samples of one (city, pollutant) pair to a clean series.
///
/// Samples are stably sorted by timestamp; when several share a timestamp the
/// one that comes last in that order is kept, so with samples given in
/// ingestion order the latest write wins.
pub fn reduce(samples: impl IntoIterator<Item = Sample>) -> Series {
    let mut sorted: Vec<Sample> = samples.into_iter().collect();
    sorted.sort_by_key(|sample| sample.timestamp);

    let mut points: Vec<Sample> = Vec::with_capacity(sorted.len());
    for sample in sorted {
        match points.last_mut() {
            Some(last) if last.timestamp == sample.timestamp => *last = sample,
            _ => points.push(sample),
        }
    }

    Series::from_sorted_unique(points)
}

/// Series for a single pair, picked out of a mixed sample set.
pub fn series_for(samples: &[Sample], key: &SeriesKey) -> Series {
    let series = reduce(
        samples
            .iter()
            .filter(|sample| sample.belongs_to(key))
            .cloned(),
    );
    debug!(
        city = %key.city,
        pollutant = %key.pollutant,
        points = series.len(),
        "Reduced series"
    );
    series
}

/// Reduce every pair present in a mixed sample set independently.
pub fn reduce_by_pair(samples: &[Sample]) -> BTreeMap<SeriesKey, Series> {
    let mut grouped: BTreeMap<SeriesKey, Vec<Sample>> = BTreeMap::new();
    for sample in samples {
        grouped.entry(sample.key()).or_default().push(sample.clone());
    }

    grouped
        .into_iter()
        .map(|(key, group)| (key, reduce(group)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AqiCategory, Pollutant};
    use crate::processors::classify;
    use crate::utils::time::display_time;
    use pretty_assertions::assert_eq;

    fn pm25(city: &str, hour: u32, value: f64) -> Sample {
        Sample::new(city, Pollutant::Pm25, display_time(2024, 11, 5, hour, 0), value)
    }

    #[test]
    fn test_duplicate_timestamp_keeps_last_written() {
        let series = reduce(vec![pm25("Delhi", 10, 40.0), pm25("Delhi", 10, 55.0)]);

        assert_eq!(series.len(), 1);
        let point = &series.points()[0];
        assert_eq!(point.timestamp, display_time(2024, 11, 5, 10, 0));
        assert_eq!(point.value, 55.0);
        assert_eq!(classify(&point.pollutant, point.value), AqiCategory::Moderate);
    }

    #[test]
    fn test_output_is_strictly_ascending() {
        let series = reduce(vec![
            pm25("Delhi", 12, 70.0),
            pm25("Delhi", 9, 20.0),
            pm25("Delhi", 11, 50.0),
            pm25("Delhi", 9, 25.0),
            pm25("Delhi", 12, 75.0),
            pm25("Delhi", 10, 30.0),
        ]);

        let values: Vec<f64> = series.points().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![25.0, 30.0, 50.0, 75.0]);
        assert!(series
            .points()
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_ties_resolved_by_input_order_not_value() {
        let series = reduce(vec![
            pm25("Delhi", 8, 90.0),
            pm25("Delhi", 8, 10.0),
            pm25("Delhi", 8, 50.0),
        ]);

        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].value, 50.0);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let series = reduce(Vec::new());
        assert!(series.is_empty());
        assert!(series.span().is_none());
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let raw = vec![
            pm25("Delhi", 3, 10.0),
            pm25("Delhi", 1, 11.0),
            pm25("Delhi", 3, 12.0),
            pm25("Delhi", 2, 13.0),
            pm25("Delhi", 1, 14.0),
        ];

        let once = reduce(raw.clone());
        let twice = reduce(once.clone().into_samples());

        assert_eq!(once, twice);
        assert!(once.len() <= raw.len());
    }

    #[test]
    fn test_series_for_does_not_mix_pairs() {
        let mut samples = vec![pm25("Delhi", 1, 10.0), pm25("Mumbai", 1, 99.0)];
        samples.push(Sample::new(
            "Delhi",
            Pollutant::Pm10,
            display_time(2024, 11, 5, 1, 0),
            77.0,
        ));

        let series = series_for(&samples, &SeriesKey::new("Delhi", Pollutant::Pm25));
        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].value, 10.0);

        let missing = series_for(&samples, &SeriesKey::new("Mumbai", Pollutant::NitrogenDioxide));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_reduce_by_pair() {
        let samples = vec![
            pm25("Delhi", 2, 20.0),
            pm25("Mumbai", 1, 30.0),
            pm25("Delhi", 1, 10.0),
            pm25("Delhi", 2, 25.0),
        ];

        let reduced = reduce_by_pair(&samples);
        assert_eq!(reduced.len(), 2);

        let delhi = &reduced[&SeriesKey::new("Delhi", Pollutant::Pm25)];
        let values: Vec<f64> = delhi.points().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![10.0, 25.0]);
    }
}
