use crate::models::{
    ChartPanel, CityHighlight, DashboardState, LatestReading, Series, SeriesKey,
};
use crate::processors::classify;
use crate::utils::constants::{CONCENTRATION_UNIT, DISPLAY_TIMEZONE_ABBREVIATION, NO_DATA_LABEL};
use crate::utils::time::format_axis;

/// Plain-text rendition of dashboard outputs for the terminal.
pub struct TextReport {
    show_bands: bool,
}

impl TextReport {
    pub fn new() -> Self {
        Self { show_bands: false }
    }

    pub fn with_bands(show_bands: bool) -> Self {
        Self { show_bands }
    }

    pub fn render_dashboard(&self, state: &DashboardState) -> String {
        let mut report = String::new();

        report.push_str("=== Live Air Quality Dashboard ===\n");
        report.push_str(&format!(
            "Generated: {} {}\n",
            state.generated_at.format("%d %b %Y %H:%M"),
            DISPLAY_TIMEZONE_ABBREVIATION
        ));
        report.push_str(&format!(
            "Cities: {}\n",
            state.selected_cities.join(", ")
        ));
        if state.excluded_future > 0 {
            report.push_str(&format!(
                "Excluded {} future-dated samples\n",
                state.excluded_future
            ));
        }

        for city in &state.charts {
            report.push_str(&format!("\n--- {} ---\n", city.city));
            for panel in &city.panels {
                report.push_str(&self.render_panel(panel));
            }
        }

        report.push_str("\n=== Latest Readings ===\n");
        report.push_str(&self.render_latest_table(&state.latest));

        report.push_str("\n=== Latest Air Quality Map ===\n");
        report.push_str(&self.render_markers(&state.map.markers));
        match &state.map.bounds {
            Some(bounds) => report.push_str(&format!(
                "Fit to: S {:.4} W {:.4} N {:.4} E {:.4}\n",
                bounds.south, bounds.west, bounds.north, bounds.east
            )),
            None => report.push_str(&format!(
                "Default view: {:.1}, {:.1} (zoom {})\n",
                state.map.center.latitude, state.map.center.longitude, state.map.zoom
            )),
        }

        report.push_str("\nAQI Categories:\n");
        for entry in &state.map.legend {
            report.push_str(&format!("  ● {} ({})\n", entry.label, entry.color));
        }

        report
    }

    fn render_panel(&self, panel: &ChartPanel) -> String {
        let title = panel.pollutant.title();

        let (Some(last), Some((start, end))) = (panel.series.last(), panel.series.span()) else {
            return format!("  {}: {}\n", title, NO_DATA_LABEL);
        };

        let category = classify(&panel.pollutant, last.value);
        let mut line = format!(
            "  {}: {} points, {} – {} {}, last {:.1} {} ({}, {})\n",
            title,
            panel.series.len(),
            format_axis(&start),
            format_axis(&end),
            DISPLAY_TIMEZONE_ABBREVIATION,
            last.value,
            CONCENTRATION_UNIT,
            category.label(),
            category.color()
        );

        if self.show_bands {
            for band in &panel.bands {
                line.push_str(&format!(
                    "      {:>6.0}–{:<6.0} {}\n",
                    band.low,
                    band.high,
                    band.color()
                ));
            }
        }

        line
    }

    /// One line per latest reading.
    pub fn render_latest_table(&self, latest: &[LatestReading]) -> String {
        if latest.is_empty() {
            return format!("  {}\n", NO_DATA_LABEL);
        }

        let mut table = String::new();
        for reading in latest {
            let sample = &reading.sample;
            let category = classify(&sample.pollutant, sample.value);
            table.push_str(&format!(
                "  {:<12} {:<18} {:>8.1} {}  {}  {}\n",
                sample.city,
                sample.pollutant,
                sample.value,
                CONCENTRATION_UNIT,
                format_axis(&sample.timestamp),
                category.label()
            ));
        }
        table
    }

    /// One line per map marker, carrying the marker tooltip fields.
    pub fn render_markers(&self, markers: &[CityHighlight]) -> String {
        if markers.is_empty() {
            return format!("  {}\n", NO_DATA_LABEL);
        }

        let mut lines = String::new();
        for marker in markers {
            let sample = &marker.reading.sample;
            lines.push_str(&format!(
                "  {} [{}] {}: {:.1} {} at {} ({:.4}, {:.4})\n",
                marker.city(),
                marker.color,
                sample.pollutant,
                sample.value,
                CONCENTRATION_UNIT,
                format_axis(&sample.timestamp),
                marker.reading.location.latitude,
                marker.reading.location.longitude
            ));
        }
        lines
    }

    /// Full listing of one reduced series with per-point category.
    pub fn render_series(&self, key: &SeriesKey, series: &Series) -> String {
        let mut report = format!("=== {} {} ===\n", key.city, key.pollutant.title());

        if series.is_empty() {
            report.push_str(&format!("{}\n", NO_DATA_LABEL));
            return report;
        }

        for point in series.points() {
            let category = classify(&point.pollutant, point.value);
            report.push_str(&format!(
                "{}  {:>8.1} {}  {}\n",
                format_axis(&point.timestamp),
                point.value,
                CONCENTRATION_UNIT,
                category.label()
            ));
        }
        report
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}
