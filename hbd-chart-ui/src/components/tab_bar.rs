//! Tab strip switching between the Bookings, ADR and Cancellations panels.

use crate::state::{AppState, DashboardTab};
use dioxus::prelude::*;

#[component]
pub fn TabBar() -> Element {
    let state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 2px solid #e0e0e0; margin: 16px 0 8px 0;",
            for tab in DashboardTab::ALL {
                TabButton { key: "{tab.id()}", tab: tab, active: tab == active }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TabButtonProps {
    tab: DashboardTab,
    active: bool,
}

#[component]
fn TabButton(props: TabButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let tab = props.tab;
    let style = if props.active {
        "padding: 8px 16px; border: none; border-bottom: 3px solid #ff4b4b; background: none; font-weight: 600; cursor: pointer;"
    } else {
        "padding: 8px 16px; border: none; border-bottom: 3px solid transparent; background: none; color: #555; cursor: pointer;"
    };

    rsx! {
        button {
            id: "tab-{tab.id()}",
            style: "{style}",
            onclick: move |_| state.active_tab.set(tab),
            "{tab.label()}"
        }
    }
}
