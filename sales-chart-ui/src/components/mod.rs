//! Dioxus RSX components for the sales dashboard.

mod bar3d_chart;
mod chart_container;
mod chart_header;
mod dummy;
mod error_display;
mod searchable_dropdown;

pub use bar3d_chart::Bar3DChart;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dummy::Dummy;
pub use error_display::ErrorDisplay;
pub use searchable_dropdown::SearchableDropdown;
