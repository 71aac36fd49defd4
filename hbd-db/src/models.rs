//! Query result structs.
//!
//! All derive `Serialize` so they pass straight through to D3.js payloads
//! and the CLI's JSON export.

use hbd_core::Month;
use serde::Serialize;

/// Bookings arriving in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCount {
    pub month: Month,
    pub bookings: usize,
}

/// Cancellation rate (0-100) for one arrival month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRate {
    pub month: Month,
    pub rate: f64,
}

/// Bookings for one category (hotel type, country).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub bookings: usize,
}

/// Mean measure for one category (room type ADR, segment cancellation rate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMean {
    pub label: String,
    pub value: f64,
}

/// Every ADR value of one hotel, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelValues {
    pub hotel: String,
    pub values: Vec<f64>,
}

/// Raw KPI aggregates for a selection.
///
/// The averages are `None` when `bookings` is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTotals {
    pub bookings: usize,
    /// `AVG(is_canceled) * 100`
    pub cancellation_rate: Option<f64>,
    pub avg_lead_time: Option<f64>,
    pub avg_daily_rate: Option<f64>,
}
