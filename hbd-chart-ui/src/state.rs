//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hbd_core::HotelSelection;
use hbd_data::{BookingTable, DashboardData};

/// The three tabs below the KPI row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Bookings,
    Adr,
    Cancellations,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Bookings,
        DashboardTab::Adr,
        DashboardTab::Cancellations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Bookings => "\u{1F4C5} Bookings",
            DashboardTab::Adr => "\u{1F4B0} ADR",
            DashboardTab::Cancellations => "\u{1F52C} Cancellations",
        }
    }

    /// Stable DOM id fragment.
    pub fn id(self) -> &'static str {
        match self {
            DashboardTab::Bookings => "bookings",
            DashboardTab::Adr => "adr",
            DashboardTab::Cancellations => "cancellations",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Bookings table (None until loaded)
    pub table: Signal<Option<BookingTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Hotel values offered by the filter, in first-appearance order
    pub hotel_options: Signal<Vec<String>>,
    /// Hotels currently ticked in the filter
    pub selected_hotels: Signal<Vec<String>>,
    /// Visible tab
    pub active_tab: Signal<DashboardTab>,
    /// Snapshot for the current selection
    pub dashboard: Signal<Option<DashboardData>>,
    /// True when the current selection matched no bookings
    pub no_data: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            hotel_options: Signal::new(Vec::new()),
            selected_hotels: Signal::new(Vec::new()),
            active_tab: Signal::new(DashboardTab::default()),
            dashboard: Signal::new(None),
            no_data: Signal::new(false),
        }
    }

    /// The current filter selection.
    pub fn selection(&self) -> HotelSelection {
        self.selected_hotels.read().iter().cloned().collect()
    }
}

/// Flip one hotel in the selection, keeping the order of `options`.
pub fn toggle_hotel(options: &[String], selected: &[String], hotel: &str) -> Vec<String> {
    let mut selection: HotelSelection = selected.iter().cloned().collect();
    selection.toggle(hotel);
    options
        .iter()
        .filter(|option| selection.contains(option))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Resort Hotel".to_string(), "City Hotel".to_string()]
    }

    #[test]
    fn test_toggle_off_and_on_keeps_option_order() {
        let all = options();
        let resort_only = toggle_hotel(&all, &all, "City Hotel");
        assert_eq!(resort_only, vec!["Resort Hotel"]);

        let none = toggle_hotel(&all, &resort_only, "Resort Hotel");
        assert!(none.is_empty());

        let city_only = toggle_hotel(&all, &none, "City Hotel");
        assert_eq!(city_only, vec!["City Hotel"]);

        let both = toggle_hotel(&all, &city_only, "Resort Hotel");
        assert_eq!(both, all);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(DashboardTab::default(), DashboardTab::Bookings);
        assert!(DashboardTab::Adr.label().ends_with("ADR"));
        let ids: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["bookings", "adr", "cancellations"]);
    }
}
