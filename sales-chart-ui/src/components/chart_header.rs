//! Chart header with title and the active filter.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// City the chart is narrowed to; empty shows "All cities"
    #[props(default = String::new())]
    pub city: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let scope = if props.city.is_empty() {
        "All cities".to_string()
    } else {
        props.city.clone()
    };

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "Showing: {scope}"
            }
        }
    }
}
