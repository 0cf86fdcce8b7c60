use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::analyzers::MapBounds;
use crate::error::{ProcessingError, Result};
use crate::models::{
    bands_for, legend, ChartPanel, CityCharts, DashboardState, GeoPoint, LatestReading, MapView,
    Pollutant, Sample, SeriesKey, Snapshot,
};
use crate::processors::latest_selector::{city_highlight, latest_per_pair};
use crate::processors::series_reducer::series_for;
use crate::utils::constants::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};

/// Builds the full dashboard for one refresh from an immutable snapshot.
pub struct DashboardComposer {
    pollutants: Vec<Pollutant>,
}

impl DashboardComposer {
    pub fn new() -> Self {
        Self {
            pollutants: Pollutant::CHARTED.to_vec(),
        }
    }

    /// Chart these pollutants, in this order, for every selected city.
    pub fn with_pollutants(pollutants: Vec<Pollutant>) -> Self {
        Self { pollutants }
    }

    pub fn pollutants(&self) -> &[Pollutant] {
        &self.pollutants
    }

    pub fn compose<S: AsRef<str>>(
        &self,
        snapshot: &Snapshot,
        selected_cities: &[S],
    ) -> Result<DashboardState> {
        if selected_cities.is_empty() {
            warn!("No cities selected, nothing to render");
            return Err(ProcessingError::EmptySelection);
        }

        let mut seen = BTreeSet::new();
        let cities: Vec<String> = selected_cities
            .iter()
            .map(|city| city.as_ref().to_string())
            .filter(|city| seen.insert(city.clone()))
            .collect();

        let charts: Vec<CityCharts> = cities
            .iter()
            .map(|city| self.city_charts(snapshot.samples(), city))
            .collect();

        let latest = latest_per_pair(snapshot.samples(), &cities)?;
        let markers: Vec<_> = city_highlight(&latest).into_values().collect();
        let bounds = MapBounds::from_points(markers.iter().map(|marker| marker.location()));
        let center = bounds.map_or(
            GeoPoint::new(DEFAULT_MAP_CENTER.0, DEFAULT_MAP_CENTER.1),
            |b| b.center(),
        );
        let latest: Vec<LatestReading> = latest.into_values().collect();

        info!(
            cities = cities.len(),
            latest = latest.len(),
            markers = markers.len(),
            "Dashboard computed"
        );

        Ok(DashboardState {
            generated_at: snapshot.taken_at(),
            selected_cities: cities,
            charts,
            latest,
            map: MapView {
                markers,
                bounds,
                center,
                zoom: DEFAULT_MAP_ZOOM,
                legend: legend(),
            },
            excluded_future: snapshot.excluded_future(),
        })
    }

    fn city_charts(&self, samples: &[Sample], city: &str) -> CityCharts {
        let panels = self
            .pollutants
            .iter()
            .map(|pollutant| {
                let key = SeriesKey::new(city, pollutant.clone());
                ChartPanel {
                    city: city.to_string(),
                    pollutant: pollutant.clone(),
                    series: series_for(samples, &key),
                    bands: bands_for(pollutant).map(|bands| bands.to_vec()).unwrap_or_default(),
                }
            })
            .collect();

        CityCharts {
            city: city.to_string(),
            panels,
        }
    }
}

impl Default for DashboardComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the dashboard with the default chart pollutants.
pub fn compute_dashboard_state<S: AsRef<str>>(
    snapshot: &Snapshot,
    selected_cities: &[S],
) -> Result<DashboardState> {
    DashboardComposer::new().compose(snapshot, selected_cities)
}

/// Distinct city names in a sample set, sorted.
pub fn available_cities(samples: &[Sample]) -> Vec<String> {
    samples
        .iter()
        .map(|sample| sample.city.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
