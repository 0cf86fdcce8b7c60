pub mod args;
pub mod commands;
pub mod logging;
pub mod settings;

pub use args::{Cli, Commands};
pub use commands::run;
pub use settings::Settings;
