pub mod band;
pub mod dashboard;
pub mod pollutant;
pub mod reading;
pub mod sample;
pub mod series;
pub mod snapshot;

pub use band::{bands_for, AqiCategory, Band};
pub use dashboard::{legend, ChartPanel, CityCharts, DashboardState, LegendEntry, MapView};
pub use pollutant::Pollutant;
pub use reading::{CityHighlight, LatestReading};
pub use sample::{GeoPoint, Sample, SeriesKey};
pub use series::Series;
pub use snapshot::Snapshot;
