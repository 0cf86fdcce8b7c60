use serde::Serialize;

use crate::models::Sample;
use crate::utils::time::DisplayTime;

/// A time-ordered curve for one (city, pollutant) pair.
///
/// Timestamps are strictly ascending; there is at most one point per instant.
/// Built by [`crate::processors::series_reducer::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    points: Vec<Sample>,
}

impl Series {
    pub(crate) fn from_sorted_unique(points: Vec<Sample>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Self { points }
    }

    pub fn points(&self) -> &[Sample] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.points.last()
    }

    /// First and last timestamps, if the series has any points.
    pub fn span(&self) -> Option<(DisplayTime, DisplayTime)> {
        Some((self.first()?.timestamp, self.last()?.timestamp))
    }

    /// Hand the points back as an unordered bag of samples.
    pub fn into_samples(self) -> Vec<Sample> {
        self.points
    }
}
