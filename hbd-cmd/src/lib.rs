//! Command implementations for the hotel booking dashboard CLI.
//!
//! Every subcommand loads the bookings CSV once, applies the hotel filter
//! and prints or writes what the web dashboard would show for it.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use hbd_core::{DashboardError, HotelSelection};
use hbd_data::{BookingTable, DashboardData};

pub mod export;
pub mod report;

/// Bookings CSV used when `--data` is not given.
pub const DEFAULT_DATA_PATH: &str = "fixtures/hotel_bookings.csv";

/// Output format for `report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the four KPIs and the dataset's arrival date span
    Summary {
        /// Path to the bookings CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Hotel to include (repeatable). All hotels when omitted
        #[arg(long = "hotel")]
        hotels: Vec<String>,
    },

    /// Print every aggregate table behind the dashboard charts
    Report {
        /// Path to the bookings CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Hotel to include (repeatable). All hotels when omitted
        #[arg(long = "hotel")]
        hotels: Vec<String>,

        /// Plain text tables or the JSON snapshot
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write the dashboard snapshot for a selection to a JSON file
    Export {
        /// Path to the bookings CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Output path for the JSON snapshot
        #[arg(short = 'o', long)]
        output: String,

        /// Hotel to include (repeatable). All hotels when omitted
        #[arg(long = "hotel")]
        hotels: Vec<String>,
    },

    /// List the distinct hotel values in the bookings CSV
    Hotels {
        /// Path to the bookings CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data, hotels } => report::run_summary(&data, &hotels),
        Command::Report {
            data,
            hotels,
            format,
        } => report::run_report(&data, &hotels, format),
        Command::Export {
            data,
            output,
            hotels,
        } => export::run_export(&data, &output, &hotels),
        Command::Hotels { data } => report::run_hotels(&data),
    }
}

pub(crate) fn load_table(path: &str) -> anyhow::Result<BookingTable> {
    BookingTable::from_path(path).with_context(|| format!("Failed to load bookings from {}", path))
}

/// The named hotels, or every hotel in the table when none were named.
pub fn resolve_selection(table: &BookingTable, hotels: &[String]) -> HotelSelection {
    if hotels.is_empty() {
        HotelSelection::new(table.hotels())
    } else {
        HotelSelection::new(hotels.iter().cloned())
    }
}

/// Build the snapshot, or print the no-data warning and return `None`.
///
/// A failed query is an error, not a warning.
pub(crate) fn build_or_warn(
    table: &BookingTable,
    selection: &HotelSelection,
) -> anyhow::Result<Option<DashboardData>> {
    match DashboardData::build(table, selection) {
        Ok(data) => Ok(Some(data)),
        Err(e @ DashboardError::EmptyFilterResult) => {
            eprintln!("Warning: {}", e);
            Ok(None)
        }
        Err(e) => Err(e).context("Failed to aggregate bookings"),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Absolute path of the bundled fixture CSV.
    pub const FIXTURE_PATH: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/hotel_bookings.csv");
}
