//! One-line status banners: loading, no data, load failure.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Warning,
    Error,
}

impl BannerKind {
    fn style(self) -> &'static str {
        match self {
            BannerKind::Info => "background: #E3F2FD; color: #1565C0; border: 1px solid #90CAF9;",
            BannerKind::Warning => "background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082;",
            BannerKind::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            BannerKind::Info => "\u{23F3}",
            BannerKind::Warning => "\u{26A0}\u{FE0F}",
            BannerKind::Error => "\u{274C}",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    pub kind: BannerKind,
    pub message: String,
}

/// Replaces the KPI row and tabs while there is nothing to chart.
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let style = format!(
        "padding: 12px 16px; margin: 8px 0; border-radius: 4px; {}",
        props.kind.style()
    );
    let role = match props.kind {
        BannerKind::Info => "status",
        BannerKind::Warning | BannerKind::Error => "alert",
    };

    rsx! {
        div {
            role: role,
            style: "{style}",
            "{props.kind.icon()} {props.message}"
        }
    }
}
