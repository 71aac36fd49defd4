//! Reusable Dioxus RSX components for the hotel booking dashboard.

mod chart_section;
mod hotel_filter;
mod kpi_row;
mod status_banner;
mod tab_bar;

pub use chart_section::ChartSection;
pub use hotel_filter::HotelFilter;
pub use kpi_row::{KpiRow, MetricCard};
pub use status_banner::{BannerKind, StatusBanner};
pub use tab_bar::TabBar;
