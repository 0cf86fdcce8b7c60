use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, warn};

use crate::cli::args::{Cli, Commands};
use crate::cli::logging::init_logging;
use crate::cli::settings::Settings;
use crate::error::{ProcessingError, Result};
use crate::models::{DashboardState, Pollutant, Sample, SeriesKey, Snapshot};
use crate::processors::{
    available_cities, city_highlight, classify, latest_per_pair, series_for, DashboardComposer,
};
use crate::readers::read_store;
use crate::utils::constants::CONCENTRATION_UNIT;
use crate::utils::filename::generate_default_export_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{JsonWriter, TextReport};

const EMPTY_SELECTION_WARNING: &str = "⚠️  Please select at least one city";

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Dashboard {
            input,
            cities,
            json,
            export,
            bands,
            interactive,
        } => {
            let store = input.unwrap_or_else(|| settings.database.clone());
            let selection = selection(cities, &settings);
            let json = if export {
                Some(generate_default_export_filename())
            } else {
                json
            };
            let options = DashboardOptions {
                store: &store,
                selection: &selection,
                json: json.as_deref(),
                bands,
            };

            if interactive {
                run_interactive(&settings, &options)?;
            } else {
                render_dashboard(&settings, &options)?;
            }
        }

        Commands::Latest { input, cities } => {
            let store = input.unwrap_or_else(|| settings.database.clone());
            let selection = selection(cities, &settings);
            if selection.is_empty() {
                warn_empty_selection();
                return Ok(());
            }

            let snapshot = Snapshot::capture(load_samples(&store, &settings.table, false)?);
            let latest = latest_per_pair(snapshot.samples(), &selection)?;
            let highlights: Vec<_> = city_highlight(&latest).into_values().collect();
            let latest: Vec<_> = latest.into_values().collect();

            let report = TextReport::new();
            println!("=== Latest Readings ===");
            print!("{}", report.render_latest_table(&latest));
            println!("\n=== City Highlights ===");
            print!("{}", report.render_markers(&highlights));
        }

        Commands::Series {
            input,
            city,
            pollutant,
        } => {
            let store = input.unwrap_or_else(|| settings.database.clone());
            let snapshot = Snapshot::capture(load_samples(&store, &settings.table, false)?);
            let key = SeriesKey::new(city, Pollutant::from(pollutant));

            let series = series_for(snapshot.samples(), &key);
            print!("{}", TextReport::new().render_series(&key, &series));
        }

        Commands::Classify { pollutant, value } => {
            let pollutant = Pollutant::from(pollutant);
            let category = classify(&pollutant, value);
            println!(
                "{} {} {}: {} ({})",
                pollutant,
                value,
                CONCENTRATION_UNIT,
                category.label(),
                category.color()
            );
        }

        Commands::Cities { input } => {
            let store = input.unwrap_or_else(|| settings.database.clone());
            let samples = load_samples(&store, &settings.table, false)?;
            for city in available_cities(&samples) {
                println!("{}", city);
            }
        }
    }

    Ok(())
}

struct DashboardOptions<'a> {
    store: &'a Path,
    selection: &'a [String],
    json: Option<&'a Path>,
    bands: bool,
}

/// CLI cities win over configured ones; blank names are dropped.
fn selection(cities: Vec<String>, settings: &Settings) -> Vec<String> {
    let chosen = if cities.is_empty() {
        settings.cities.clone()
    } else {
        cities
    };

    chosen
        .into_iter()
        .map(|city| city.trim().to_string())
        .filter(|city| !city.is_empty())
        .collect()
}

fn warn_empty_selection() {
    warn!("Empty city selection");
    eprintln!("{}", EMPTY_SELECTION_WARNING);
}

fn load_samples(store: &Path, table: &str, quiet: bool) -> Result<Vec<Sample>> {
    let progress = ProgressReporter::new_spinner("Reading air-quality store...", quiet);
    let samples = read_store(store, table)?;
    progress.finish_and_clear();
    Ok(samples)
}

/// One refresh: read the store, snapshot it and compute every view.
fn refresh(settings: &Settings, options: &DashboardOptions<'_>) -> Result<DashboardState> {
    if options.selection.is_empty() {
        return Err(ProcessingError::EmptySelection);
    }

    let json_to_stdout = options.json.is_some_and(is_stdout);
    let samples = load_samples(options.store, &settings.table, json_to_stdout)?;
    let snapshot = Snapshot::capture(samples);

    DashboardComposer::with_pollutants(settings.pollutants.clone())
        .compose(&snapshot, options.selection)
}

fn render_dashboard(settings: &Settings, options: &DashboardOptions<'_>) -> Result<()> {
    let state = match refresh(settings, options) {
        Ok(state) => state,
        Err(e) if e.is_usage_warning() => {
            warn_empty_selection();
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match options.json {
        Some(path) if is_stdout(path) => {
            let stdout = io::stdout();
            JsonWriter::new().write_to(&state, stdout.lock())?;
            println!();
        }
        Some(path) => {
            JsonWriter::new().write_file(&state, path)?;
            print!("{}", TextReport::with_bands(options.bands).render_dashboard(&state));
            println!("\nDashboard JSON written to {}", path.display());
        }
        None => {
            print!("{}", TextReport::with_bands(options.bands).render_dashboard(&state));
        }
    }

    Ok(())
}

/// Pull-to-refresh loop: every Enter recomputes the dashboard from a fresh read.
fn run_interactive(settings: &Settings, options: &DashboardOptions<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Err(e) = render_dashboard(settings, options) {
            error!(error = %e, "Refresh failed");
            eprintln!("Refresh failed: {}", e);
        }

        print!("\nPress Enter to refresh, 'q' to quit: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        if line?.trim().eq_ignore_ascii_case("q") {
            break;
        }
    }

    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}
