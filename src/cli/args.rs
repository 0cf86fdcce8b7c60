use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-dashboard")]
#[command(about = "Live air-quality dashboard over a local sample store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: aqi-dashboard.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute and render the dashboard: charts, latest readings and map
    Dashboard {
        #[arg(short, long, help = "Store path (.db SQLite or .csv export)")]
        input: Option<PathBuf>,

        #[arg(short, long = "city", help = "City to include (repeatable)")]
        cities: Vec<String>,

        #[arg(long, help = "Write dashboard JSON to this path ('-' for stdout)")]
        json: Option<PathBuf>,

        #[arg(
            long,
            conflicts_with = "json",
            help = "Write dashboard JSON to output/aqi-dashboard-{YYMMDD}.json"
        )]
        export: bool,

        #[arg(long, help = "List AQI bands under each chart")]
        bands: bool,

        #[arg(long, help = "Refresh on Enter until 'q' is entered")]
        interactive: bool,
    },

    /// Show the latest reading per city and pollutant, and each city's marker
    Latest {
        #[arg(short, long, help = "Store path (.db SQLite or .csv export)")]
        input: Option<PathBuf>,

        #[arg(short, long = "city", help = "City to include (repeatable)")]
        cities: Vec<String>,
    },

    /// Show the reduced time series of one city and pollutant
    Series {
        #[arg(short, long, help = "Store path (.db SQLite or .csv export)")]
        input: Option<PathBuf>,

        #[arg(long)]
        city: String,

        #[arg(short, long)]
        pollutant: String,
    },

    /// Classify a concentration (µg/m³)
    Classify {
        pollutant: String,

        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// List the cities present in the store
    Cities {
        #[arg(short, long, help = "Store path (.db SQLite or .csv export)")]
        input: Option<PathBuf>,
    },
}
