//! Hotel Booking Dashboard
//!
//! Sidebar hotel filter, four KPI cards and three tabs of D3.js charts
//! (Bookings, ADR, Cancellations) over a bookings CSV.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/hotel_bookings.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV once into a `BookingTable`, offer every hotel
//!    in the filter and select all of them.
//! 4. On selection or tab change: rebuild `DashboardData` from the table and
//!    re-render the charts of the visible tab. An empty selection shows the
//!    no-data notice and nothing else.

use dioxus::prelude::*;
use hbd_chart_ui::charts::{self, ChartPayload};
use hbd_chart_ui::components::{
    BannerKind, ChartSection, HotelFilter, KpiRow, StatusBanner, TabBar,
};
use hbd_chart_ui::js_bridge;
use hbd_chart_ui::state::{AppState, DashboardTab};
use hbd_core::DashboardError;
use hbd_data::{BookingTable, DashboardData};

// Embed the bookings CSV at compile time.
const BOOKINGS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/hotel_bookings.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hotel-dashboard-root"))
        .launch(App);
}

fn draw(render: fn(&str, &str, &str), container_id: &str, payload: ChartPayload) {
    render(container_id, &payload.data_json, &payload.config_json);
}

/// Push the charts of one tab to D3.
fn render_tab(tab: DashboardTab, data: &DashboardData) {
    match tab {
        DashboardTab::Bookings => {
            draw(
                js_bridge::render_area_chart,
                charts::MONTHLY_BOOKINGS_ID,
                charts::monthly_bookings(data),
            );
            draw(
                js_bridge::render_pie_chart,
                charts::HOTEL_SHARE_ID,
                charts::hotel_share(data),
            );
            draw(
                js_bridge::render_bar_chart,
                charts::TOP_COUNTRIES_ID,
                charts::top_countries(data),
            );
        }
        DashboardTab::Adr => {
            draw(
                js_bridge::render_box_plot,
                charts::ADR_BY_HOTEL_ID,
                charts::adr_by_hotel(data),
            );
            draw(
                js_bridge::render_bar_chart,
                charts::ADR_BY_ROOM_ID,
                charts::adr_by_room(data),
            );
        }
        DashboardTab::Cancellations => {
            draw(
                js_bridge::render_line_chart,
                charts::MONTHLY_CANCELLATION_ID,
                charts::monthly_cancellation(data),
            );
            draw(
                js_bridge::render_bar_chart,
                charts::SEGMENT_CANCELLATION_ID,
                charts::segment_cancellation(data),
            );
            draw(
                js_bridge::render_heatmap,
                charts::CORRELATION_ID,
                charts::correlation(data),
            );
        }
    }
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[HBD] dashboard App component mounted".into());

    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        match BookingTable::from_csv_str(BOOKINGS_CSV) {
            Ok(table) => {
                let hotels = table.hotels();
                log::info!(
                    "[HBD] dashboard: loaded {} bookings for {} hotel(s)",
                    table.len(),
                    hotels.len()
                );
                state.hotel_options.set(hotels.clone());
                state.selected_hotels.set(hotels);
                state.table.set(Some(table));
            }
            Err(e) => {
                log::error!("Failed to load bookings: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Rebuild the snapshot and re-render the visible tab ───
    // Re-runs whenever loading, the table, the selection or the tab change.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        let selection = state.selection();
        let tab = (state.active_tab)();

        let result = match state.table.read().as_ref() {
            Some(table) => DashboardData::build(table, &selection),
            None => return,
        };

        match result {
            Ok(data) => {
                state.no_data.set(false);
                render_tab(tab, &data);
                state.dashboard.set(Some(data));
            }
            Err(DashboardError::EmptyFilterResult) => {
                state.no_data.set(true);
                state.dashboard.set(None);
            }
            Err(e) => {
                log::error!("[HBD] dashboard: {}", e);
                state.no_data.set(false);
                state.dashboard.set(None);
                state.error_msg.set(Some(e.to_string()));
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            Sidebar {}

            div {
                style: "flex: 1; padding: 16px 32px; min-width: 0;",

                h1 {
                    style: "margin: 8px 0 4px 0;",
                    "\u{1F3E8} Hotel Booking Dashboard"
                }
                h3 {
                    style: "margin: 0 0 12px 0; font-weight: 500; color: #444;",
                    "Key Performance Indicators & Trends"
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    StatusBanner {
                        kind: BannerKind::Error,
                        message: format!("Failed to load bookings: {}", err),
                    }
                } else if *state.loading.read() {
                    StatusBanner {
                        kind: BannerKind::Info,
                        message: "Loading booking data...".to_string(),
                    }
                } else if *state.no_data.read() {
                    StatusBanner {
                        kind: BannerKind::Warning,
                        message: DashboardError::EmptyFilterResult.to_string(),
                    }
                } else {
                    KpiRow {}
                    TabBar {}
                    TabPanel { tab: (state.active_tab)() }
                }
            }
        }
    }
}

/// Sidebar with the hotel filter.
#[component]
fn Sidebar() -> Element {
    rsx! {
        div {
            style: "width: 260px; padding: 16px; background: #f0f2f6; border-right: 1px solid #e0e0e0;",
            h2 {
                style: "margin: 8px 0; font-size: 20px;",
                "Hotel Dashboard"
            }
            p {
                style: "font-size: 13px; color: #555;",
                "Explore hotel booking trends and performance metrics."
            }
            HotelFilter {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TabPanelProps {
    tab: DashboardTab,
}

/// Chart sections of the visible tab. D3 renders into them by id.
#[component]
fn TabPanel(props: TabPanelProps) -> Element {
    match props.tab {
        DashboardTab::Bookings => rsx! {
            ChartSection {
                id: charts::MONTHLY_BOOKINGS_ID.to_string(),
                title: "Monthly Booking Trends".to_string(),
            }
            ChartSection {
                id: charts::HOTEL_SHARE_ID.to_string(),
                title: "Bookings by Hotel Type".to_string(),
            }
            ChartSection {
                id: charts::TOP_COUNTRIES_ID.to_string(),
                title: "Top 10 Countries by Number of Bookings".to_string(),
            }
        },
        DashboardTab::Adr => rsx! {
            ChartSection {
                id: charts::ADR_BY_HOTEL_ID.to_string(),
                title: "ADR by Hotel Type".to_string(),
            }
            ChartSection {
                id: charts::ADR_BY_ROOM_ID.to_string(),
                title: "ADR by Room Type".to_string(),
            }
        },
        DashboardTab::Cancellations => rsx! {
            ChartSection {
                id: charts::MONTHLY_CANCELLATION_ID.to_string(),
                title: "Monthly Cancellation Rate".to_string(),
            }
            ChartSection {
                id: charts::SEGMENT_CANCELLATION_ID.to_string(),
                title: "Cancellation Rate by Market Segment".to_string(),
            }
            ChartSection {
                id: charts::CORRELATION_ID.to_string(),
                title: "Heatmap of Correlations".to_string(),
                caption: "Pearson correlation between every numeric column, one decimal.".to_string(),
                height: 620,
            }
        },
    }
}
