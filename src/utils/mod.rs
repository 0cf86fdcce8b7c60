pub mod constants;
pub mod filename;
pub mod progress;
pub mod time;

pub use constants::*;
pub use filename::generate_default_export_filename;
pub use progress::ProgressReporter;
pub use time::{now_display, parse_utc_timestamp, to_display_time, DisplayTime};
