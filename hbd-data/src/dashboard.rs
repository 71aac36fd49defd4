//! One full dashboard pass: filter, guard, then every KPI and aggregate.

use crate::aggregates::{
    self, CategoryCount, CategoryMean, HotelAdr, MonthCount, MonthRate, TOP_COUNTRIES_LIMIT,
};
use crate::correlation::CorrelationMatrix;
use crate::kpi::{KpiDisplay, Kpis};
use crate::table::BookingTable;
use hbd_core::{DashboardError, HotelSelection};
use serde::Serialize;

/// Everything the presentation layer draws for one hotel selection.
///
/// Serialized as-is for D3.js payloads and CLI JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    /// Hotel options for the filter control, in first-appearance order
    pub hotels: Vec<String>,
    /// Hotels that were selected for this pass
    pub selected_hotels: Vec<String>,
    pub kpis: Kpis,
    pub kpi_display: KpiDisplay,
    pub monthly_bookings: Vec<MonthCount>,
    pub bookings_by_hotel: Vec<CategoryCount>,
    pub top_countries: Vec<CategoryCount>,
    pub adr_by_hotel: Vec<HotelAdr>,
    pub adr_by_room_type: Vec<CategoryMean>,
    pub monthly_cancellation_rate: Vec<MonthRate>,
    pub cancellation_by_segment: Vec<CategoryMean>,
    pub correlation: CorrelationMatrix,
}

impl DashboardData {
    /// Run the pipeline for one selection.
    ///
    /// Returns `DashboardError::EmptyFilterResult` before computing anything
    /// when the selection matches no booking, and `DashboardError::Query`
    /// when a database query fails.
    pub fn build(table: &BookingTable, selection: &HotelSelection) -> Result<Self, DashboardError> {
        let view = table.filter(selection)?;
        if let Err(e) = view.ensure_not_empty() {
            log::warn!(
                "[HBD] dashboard: selection {:?} matched no bookings",
                selection.iter().collect::<Vec<_>>()
            );
            return Err(e);
        }

        let kpis = Kpis::compute(&view)?;
        let data = Self {
            hotels: table.hotels(),
            selected_hotels: selection.iter().map(str::to_string).collect(),
            kpi_display: kpis.display(),
            kpis,
            monthly_bookings: aggregates::monthly_bookings(&view)?,
            bookings_by_hotel: aggregates::bookings_by_hotel(&view)?,
            top_countries: aggregates::top_countries(&view, TOP_COUNTRIES_LIMIT)?,
            adr_by_hotel: aggregates::adr_by_hotel(&view)?,
            adr_by_room_type: aggregates::adr_by_room_type(&view)?,
            monthly_cancellation_rate: aggregates::monthly_cancellation_rate(&view)?,
            cancellation_by_segment: aggregates::cancellation_by_market_segment(&view)?,
            correlation: CorrelationMatrix::compute(&view),
        };

        log::info!(
            "[HBD] dashboard: {} of {} bookings selected across {} hotel(s)",
            view.len(),
            table.len(),
            data.bookings_by_hotel.len()
        );
        Ok(data)
    }
}
