//! Inline error box for failed loads and queries.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Short label shown before the message, e.g. "Sales query failed"
    pub label: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 10px 14px; margin: 8px 0; background: #fdecea; color: #b3261e; border-left: 4px solid #b3261e; border-radius: 2px; font-size: 13px;",
            strong { "{props.label}: " }
            "{props.message}"
        }
    }
}
