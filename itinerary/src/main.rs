use std::fs::File;
use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use itinerary::build_itinerary_from_reader;
use itinerary::config::RunConfig;
use itinerary::render::render;

/// Exit status when the itinerary has problems.
const EXIT_DIAGNOSTICS: u8 = 1;
/// Exit status when the run could not start.
const EXIT_SETUP: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::from(EXIT_SETUP);
        }
    };

    let table = match config.location_table() {
        Ok(table) => table,
        Err(e) => {
            error!("failed to load locations: {e}");
            return ExitCode::from(EXIT_SETUP);
        }
    };
    info!(locations = table.len(), "loaded location table");

    let context = match config.context(&table) {
        Ok(context) => context,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(EXIT_SETUP);
        }
    };

    let path = std::env::args().nth(1).filter(|p| p != "-");
    let result = match &path {
        Some(path) => match File::open(path) {
            Ok(file) => build_itinerary_from_reader(file, &context),
            Err(e) => {
                error!("failed to open {path}: {e}");
                return ExitCode::from(EXIT_SETUP);
            }
        },
        None => build_itinerary_from_reader(io::stdin().lock(), &context),
    };

    let itinerary = match result {
        Ok(itinerary) => itinerary,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(EXIT_SETUP);
        }
    };

    for diagnostic in &itinerary.diagnostics {
        warn!(line = ?diagnostic.line_number, severity = ?diagnostic.severity, "{diagnostic}");
    }

    match render(&itinerary, config.output) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e}");
            return ExitCode::from(EXIT_SETUP);
        }
    }

    if itinerary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DIAGNOSTICS)
    }
}
