//! Shared Dioxus components and D3.js bridge for the hotel booking dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `charts`: JSON payloads for each chart, built from `DashboardData`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filter, KPI cards, tabs, chart sections, banners)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod state;
