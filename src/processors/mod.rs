pub mod classifier;
pub mod dashboard_composer;
pub mod latest_selector;
pub mod series_reducer;

pub use classifier::{classify, color_for};
pub use dashboard_composer::{available_cities, compute_dashboard_state, DashboardComposer};
pub use latest_selector::{city_highlight, latest_per_pair};
pub use series_reducer::{reduce, reduce_by_pair, series_for};
