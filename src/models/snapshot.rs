use tracing::{debug, info};

use crate::models::Sample;
use crate::utils::time::{now_display, DisplayTime};

/// An immutable view of the store taken for one refresh.
///
/// Samples dated after `taken_at` are dropped on construction, so every
/// view derived from a snapshot only sees past and present readings.
#[derive(Debug, Clone)]
pub struct Snapshot {
    samples: Vec<Sample>,
    taken_at: DisplayTime,
    excluded_future: usize,
}

impl Snapshot {
    pub fn new(samples: Vec<Sample>, now: DisplayTime) -> Self {
        let total = samples.len();
        let samples: Vec<Sample> = samples
            .into_iter()
            .filter(|sample| sample.timestamp <= now)
            .collect();
        let excluded_future = total - samples.len();

        if excluded_future > 0 {
            info!(
                excluded = excluded_future,
                now = %now,
                "Dropped future-dated samples"
            );
        }
        debug!(kept = samples.len(), "Snapshot taken");

        Self {
            samples,
            taken_at: now,
            excluded_future,
        }
    }

    /// Snapshot against the current display-time clock.
    pub fn capture(samples: Vec<Sample>) -> Self {
        Self::new(samples, now_display())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn taken_at(&self) -> DisplayTime {
        self.taken_at
    }

    pub fn excluded_future(&self) -> usize {
        self.excluded_future
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
