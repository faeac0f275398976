//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the chart engine binds to
    pub id: String,
    /// Whether the chart data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels; the engine needs a sized element
    #[props(default = 500)]
    pub min_height: u32,
}

/// A sized div for the chart engine, with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: 100%; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%; min-height: {props.min_height}px;",
            }
        }
    }
}
