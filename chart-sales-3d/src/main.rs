//! Sales by City and Year
//!
//! Single-page shell composing the searchable city dropdown, the 3D bar
//! chart and the dummy wiring example.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/sales_history.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it; on mount it is loaded into the in-memory
//!    `sales_db::Database`, which is provided as the query client.
//! 3. The dropdown writes `selected_city`; the chart re-queries and
//!    re-renders through ECharts whenever it changes.

use dioxus::prelude::*;
use sales_chart_ui::components::{Bar3DChart, ChartHeader, Dummy, ErrorDisplay, SearchableDropdown};
use sales_chart_ui::state::{AppState, QueryContext};
use sales_db::Database;

const SALES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sales_history.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sales-3d-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Load the store once and provide it as the query client.
    let load_error = use_hook(|| match Database::from_csv(SALES_CSV) {
        Ok(db) => {
            provide_context(QueryContext::new(db));
            None
        }
        Err(e) => {
            log::error!("[Sales] app: failed to load sales data: {e:#}");
            Some(format!("failed to load sales data: {e}"))
        }
    });

    let selected = (state.selected_city)();
    let dummy_output = (state.dummy_output)();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(message) = load_error {
                ErrorDisplay { message, label: "Startup error".to_string() }
            } else {
                SearchableDropdown { selected_city: state.selected_city }

                ChartHeader {
                    title: "Sales by City and Year".to_string(),
                    city: selected.clone(),
                }

                div {
                    style: "height: 600px;",
                    Bar3DChart { city_name: selected }
                }

                div {
                    style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0; font-size: 12px; color: #666;",
                    Dummy {
                        dummy_input: "Sales dashboard".to_string(),
                        dummy_output: state.dummy_output,
                        an_event: move |_| log::info!("[Sales] app: dummy clicked"),
                    }
                    p { "Dummy output: {dummy_output}" }
                }
            }
        }
    }
}
