pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
pub use models::{AqiCategory, DashboardState, Pollutant, Sample, Snapshot};
pub use processors::{classify, compute_dashboard_state};
