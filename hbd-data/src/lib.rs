//! Loading, filtering and aggregation of hotel booking data.
//!
//! This crate turns the bookings CSV into the data shapes the dashboard
//! draws: scalar KPIs, small aggregate tables and a correlation matrix.
//!
//! # Pipeline
//!
//! 1. [`BookingTable`] loads the CSV once (typed records plus every
//!    numeric column) and indexes the records in an in-memory SQLite
//!    database from `hbd-db`.
//! 2. [`BookingTable::filter`] selects the rows of the chosen hotels into a
//!    [`FilteredView`].
//! 3. [`DashboardData::build`] refuses an empty view with
//!    `DashboardError::EmptyFilterResult`, otherwise computes the KPIs and
//!    every aggregate from the view.
//!
//! Counts, averages and orderings are SQL queries restricted to the view's
//! hotels. Box-plot quartiles and the correlation matrix are computed in
//! Rust from the query results. Nothing is cached between selections.
//!
//! ```rust
//! use hbd_core::HotelSelection;
//! use hbd_data::{BookingTable, DashboardData};
//!
//! let table = BookingTable::from_csv_str(
//!     "hotel,is_canceled,lead_time,adr,arrival_date_month,country,reserved_room_type,market_segment\n\
//!      Resort Hotel,0,10,100.0,January,PRT,A,Direct\n\
//!      City Hotel,1,20,150.0,January,GBR,A,Groups\n",
//! )
//! .unwrap();
//!
//! let data = DashboardData::build(&table, &HotelSelection::new(["Resort Hotel"])).unwrap();
//! assert_eq!(data.kpis.total_bookings, 1);
//! assert_eq!(data.kpi_display.avg_daily_rate, "$100.00");
//! ```

pub mod aggregates;
pub mod correlation;
pub mod dashboard;
pub mod filter;
pub mod kpi;
pub mod stats;
pub mod table;

pub use correlation::CorrelationMatrix;
pub use dashboard::DashboardData;
pub use filter::FilteredView;
pub use kpi::{KpiDisplay, Kpis};
pub use table::{BookingTable, NumericColumn};
