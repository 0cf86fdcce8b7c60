use crate::models::{bands_for, AqiCategory, Pollutant};

/// Classify a concentration (µg/m³) for a pollutant.
///
/// Bands are scanned in ascending order and the first one whose upper bound
/// is not exceeded wins; anything above the last threshold is the most severe
/// category. Pollutants without a band table, and negative or non-finite
/// values, are [`AqiCategory::Unclassified`].
pub fn classify(pollutant: &Pollutant, value: f64) -> AqiCategory {
    let Some(bands) = bands_for(pollutant) else {
        return AqiCategory::Unclassified;
    };

    if !value.is_finite() || value < 0.0 {
        return AqiCategory::Unclassified;
    }

    let Some((last, graded)) = bands.split_last() else {
        return AqiCategory::Unclassified;
    };

    graded
        .iter()
        .find(|band| value <= band.high)
        .map_or(last.category, |band| band.category)
}

/// Display color for a reading, e.g. the fill of a map marker.
pub fn color_for(pollutant: &Pollutant, value: f64) -> &'static str {
    classify(pollutant, value).color()
}
