//! Core types for the hotel booking dashboard.
//!
//! - `booking`: one row of the bookings CSV
//! - `month`: calendar-ordered arrival month
//! - `selection`: the set of hotels chosen in the filter control
//! - `error`: load and pipeline error kinds

pub mod booking;
pub mod error;
pub mod month;
pub mod selection;

pub use booking::BookingRecord;
pub use error::{DashboardError, DataLoadError};
pub use month::Month;
pub use selection::HotelSelection;
