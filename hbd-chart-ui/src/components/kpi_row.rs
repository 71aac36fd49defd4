//! The four headline metric cards.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
}

/// One metric: small label above a large value.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 12px 16px; background: #fafafa; border: 1px solid #e0e0e0; border-radius: 6px;",
            div {
                style: "font-size: 13px; color: #555;",
                "{props.label}"
            }
            div {
                style: "font-size: 26px; font-weight: 600; margin-top: 4px;",
                "{props.value}"
            }
        }
    }
}

/// Total bookings, cancellation rate, average lead time and average daily
/// rate for the current selection. Renders nothing without a snapshot.
#[component]
pub fn KpiRow() -> Element {
    let state = use_context::<AppState>();
    let display = state
        .dashboard
        .read()
        .as_ref()
        .map(|data| data.kpi_display.clone());

    let Some(kpis) = display else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
            MetricCard { label: "\u{1F4E6} Total Bookings".to_string(), value: kpis.total_bookings }
            MetricCard { label: "\u{274C} Cancellation Rate".to_string(), value: kpis.cancellation_rate }
            MetricCard { label: "\u{23F3} Avg Lead Time".to_string(), value: kpis.avg_lead_time }
            MetricCard { label: "\u{1F4B0} Avg Daily Rate".to_string(), value: kpis.avg_daily_rate }
        }
    }
}
