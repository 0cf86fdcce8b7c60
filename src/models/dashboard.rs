use serde::Serialize;

use crate::analyzers::MapBounds;
use crate::models::{AqiCategory, Band, CityHighlight, GeoPoint, LatestReading, Pollutant, Series};
use crate::utils::time::DisplayTime;

/// One time-series chart: the reduced curve plus its background bands.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub city: String,
    pub pollutant: Pollutant,
    pub series: Series,
    /// Empty when the pollutant has no thresholds; the chart is then unshaded.
    pub bands: Vec<Band>,
}

impl ChartPanel {
    /// `false` means the panel renders as "No data".
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityCharts {
    pub city: String,
    pub panels: Vec<ChartPanel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: AqiCategory,
    pub label: &'static str,
    pub color: &'static str,
}

/// Static map legend: the four graded categories and their colors.
pub fn legend() -> Vec<LegendEntry> {
    AqiCategory::GRADED
        .iter()
        .map(|category| LegendEntry {
            category: *category,
            label: category.label(),
            color: category.color(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub markers: Vec<CityHighlight>,
    /// Box the view is fitted to; `None` when no marker could be placed.
    pub bounds: Option<MapBounds>,
    pub center: GeoPoint,
    pub zoom: u8,
    pub legend: Vec<LegendEntry>,
}

/// Everything a renderer needs for one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    pub generated_at: DisplayTime,
    pub selected_cities: Vec<String>,
    pub charts: Vec<CityCharts>,
    pub latest: Vec<LatestReading>,
    pub map: MapView,
    pub excluded_future: usize,
}

impl DashboardState {
    pub fn panel(&self, city: &str, pollutant: &Pollutant) -> Option<&ChartPanel> {
        self.charts
            .iter()
            .find(|charts| charts.city == city)?
            .panels
            .iter()
            .find(|panel| &panel.pollutant == pollutant)
    }

    pub fn highlight(&self, city: &str) -> Option<&CityHighlight> {
        self.map.markers.iter().find(|marker| marker.city() == city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_lists_graded_categories() {
        let entries = legend();
        let labels: Vec<&str> = entries.iter().map(|e| e.label).collect();
        let colors: Vec<&str> = entries.iter().map(|e| e.color).collect();

        assert_eq!(labels, vec!["Good", "Moderate", "Poor", "Very Poor"]);
        assert_eq!(colors, vec!["green", "yellow", "orange", "red"]);
    }
}
