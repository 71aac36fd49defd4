//! The four headline metrics shown above the tabs.

use crate::filter::{query_failed, FilteredView};
use hbd_core::DashboardError;
use hbd_utils::formatting::{format_currency, format_days, format_percent, format_thousands};
use serde::Serialize;

/// Scalar summary of a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_bookings: usize,
    /// Share of canceled bookings, 0-100
    pub cancellation_rate: f64,
    /// Mean lead time in days
    pub avg_lead_time: f64,
    /// Mean average daily rate
    pub avg_daily_rate: f64,
}

/// KPI values formatted for metric cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiDisplay {
    pub total_bookings: String,
    pub cancellation_rate: String,
    pub avg_lead_time: String,
    pub avg_daily_rate: String,
}

impl Kpis {
    /// Compute the KPIs, refusing an empty view instead of dividing by zero.
    ///
    /// The count and the three averages come from one SQL query over the
    /// view's hotel selection.
    pub fn compute(view: &FilteredView<'_>) -> Result<Self, DashboardError> {
        view.ensure_not_empty()?;
        let totals = view
            .table()
            .database()
            .query_kpi_totals(view.selection())
            .map_err(query_failed)?;
        if totals.bookings == 0 {
            return Err(DashboardError::EmptyFilterResult);
        }

        Ok(Self {
            total_bookings: totals.bookings,
            cancellation_rate: totals
                .cancellation_rate
                .ok_or(DashboardError::EmptyFilterResult)?,
            avg_lead_time: totals
                .avg_lead_time
                .ok_or(DashboardError::EmptyFilterResult)?,
            avg_daily_rate: totals
                .avg_daily_rate
                .ok_or(DashboardError::EmptyFilterResult)?,
        })
    }

    pub fn display(&self) -> KpiDisplay {
        KpiDisplay {
            total_bookings: format_thousands(self.total_bookings as u64),
            cancellation_rate: format_percent(self.cancellation_rate, 1),
            avg_lead_time: format_days(self.avg_lead_time, 1),
            avg_daily_rate: format_currency(self.avg_daily_rate),
        }
    }
}
