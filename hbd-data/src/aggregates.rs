//! Keyed aggregates behind the dashboard charts.
//!
//! Grouping, averaging and ordering run as SQL in [`hbd_db`]; this module
//! binds them to a [`FilteredView`] and adds the box statistics, which are
//! computed in Rust from the grouped ADR values.

use crate::filter::{query_failed, FilteredView};
use crate::stats::BoxStats;
use hbd_core::DashboardError;
use serde::Serialize;

pub use hbd_db::models::{CategoryCount, CategoryMean, MonthCount, MonthRate};

/// Number of countries shown in the top-countries chart.
pub const TOP_COUNTRIES_LIMIT: usize = 10;

/// Full ADR distribution for one hotel, for the box plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelAdr {
    pub hotel: String,
    pub values: Vec<f64>,
    pub stats: Option<BoxStats>,
}

/// Bookings per arrival month, January to December.
///
/// Months with no bookings are present with a count of zero.
pub fn monthly_bookings(view: &FilteredView<'_>) -> Result<Vec<MonthCount>, DashboardError> {
    view.table()
        .database()
        .query_monthly_bookings(view.selection())
        .map_err(query_failed)
}

/// Bookings per hotel, most booked first.
pub fn bookings_by_hotel(view: &FilteredView<'_>) -> Result<Vec<CategoryCount>, DashboardError> {
    view.table()
        .database()
        .query_bookings_by_hotel(view.selection())
        .map_err(query_failed)
}

/// The `limit` most frequent countries. Bookings without a country are
/// not counted.
pub fn top_countries(
    view: &FilteredView<'_>,
    limit: usize,
) -> Result<Vec<CategoryCount>, DashboardError> {
    view.table()
        .database()
        .query_top_countries(view.selection(), limit)
        .map_err(query_failed)
}

/// ADR values and box statistics per hotel, hotels in order of first
/// appearance.
pub fn adr_by_hotel(view: &FilteredView<'_>) -> Result<Vec<HotelAdr>, DashboardError> {
    let groups = view
        .table()
        .database()
        .query_adr_by_hotel(view.selection())
        .map_err(query_failed)?;
    Ok(groups
        .into_iter()
        .map(|group| HotelAdr {
            stats: BoxStats::from_values(&group.values),
            hotel: group.hotel,
            values: group.values,
        })
        .collect())
}

/// Mean ADR per reserved room type, highest first.
pub fn adr_by_room_type(view: &FilteredView<'_>) -> Result<Vec<CategoryMean>, DashboardError> {
    view.table()
        .database()
        .query_adr_by_room_type(view.selection())
        .map_err(query_failed)
}

/// Cancellation rate per arrival month in calendar order.
///
/// Only months with at least one booking appear.
pub fn monthly_cancellation_rate(
    view: &FilteredView<'_>,
) -> Result<Vec<MonthRate>, DashboardError> {
    view.table()
        .database()
        .query_monthly_cancellation_rate(view.selection())
        .map_err(query_failed)
}

/// Cancellation rate per market segment, highest first.
pub fn cancellation_by_market_segment(
    view: &FilteredView<'_>,
) -> Result<Vec<CategoryMean>, DashboardError> {
    view.table()
        .database()
        .query_cancellation_by_market_segment(view.selection())
        .map_err(query_failed)
}
