//! Multi-select checkbox list for choosing hotels.

use crate::state::{toggle_hotel, AppState};
use dioxus::prelude::*;

/// "Select Hotel(s)" control. Reads the options from AppState and
/// rewrites `selected_hotels` on every change.
#[component]
pub fn HotelFilter() -> Element {
    let state = use_context::<AppState>();
    let options = state.hotel_options.read().clone();
    let selected = state.selected_hotels.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 6px 0;",
                "Select Hotel(s)"
            }
            for hotel in options.iter() {
                HotelCheckbox {
                    key: "{hotel}",
                    hotel: hotel.clone(),
                    checked: selected.contains(hotel),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HotelCheckboxProps {
    hotel: String,
    checked: bool,
}

#[component]
fn HotelCheckbox(props: HotelCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let hotel = props.hotel.clone();

    let on_change = move |_evt: Event<FormData>| {
        let options = state.hotel_options.read().clone();
        let selected = state.selected_hotels.read().clone();
        let next = toggle_hotel(&options, &selected, &hotel);
        log::info!("[HBD] filter: selection is now {:?}", next);
        state.selected_hotels.set(next);
    };

    rsx! {
        label {
            style: "display: block; margin: 4px 0; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
                style: "margin-right: 6px;",
            }
            "{props.hotel}"
        }
    }
}
