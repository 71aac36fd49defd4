//! Titled slot for one D3.js chart inside a tab panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartSectionProps {
    /// DOM id D3 renders into
    pub id: String,
    /// Section title, e.g. "Monthly Booking Trends"
    pub title: String,
    #[props(default = String::new())]
    pub caption: String,
    /// Reserved height in pixels so tabs don't jump while charts draw
    #[props(default = 400)]
    pub height: u32,
}

#[component]
pub fn ChartSection(props: ChartSectionProps) -> Element {
    let slot_style = format!("min-height: {}px; width: 100%;", props.height);

    rsx! {
        section {
            style: "margin: 16px 0 24px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                    "{props.caption}"
                }
            }
            div {
                id: "{props.id}",
                style: "{slot_style}",
            }
        }
    }
}
