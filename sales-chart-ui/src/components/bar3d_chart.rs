//! 3D bar chart of sales by city and year.
//!
//! Props: `city_name` (empty means every city), optional `year`, and the
//! DOM `container_id` the engine binds to.
//!
//! Fetches rows for the current filter, pivots them with
//! `sales_core::series::transform` and hands the result to a fresh
//! [`ChartHandle`]. The previous handle is dropped (and its engine disposed)
//! before a new one is created; the last one goes away on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use sales_core::client::fetch_sales;
use sales_core::config::CHART_CONTAINER_ID;
use sales_core::record::SalesFilter;
use sales_core::series::{transform, value_range};

use crate::components::{ChartContainer, ErrorDisplay};
use crate::js_bridge::ChartHandle;
use crate::state::QueryContext;

#[component]
pub fn Bar3DChart(
    #[props(default)] city_name: String,
    year: Option<i32>,
    #[props(default = CHART_CONTAINER_ID.to_string())] container_id: String,
) -> Element {
    let query = use_context::<QueryContext>();

    // ─── Fetch + transform, re-run when the filter props change ───
    let data = use_resource(use_reactive(
        (&city_name, &year),
        move |(city_name, year)| {
            let client = query.client();
            async move {
                let filter = SalesFilter::new(Some(city_name.as_str()), year);
                fetch_sales(&*client, &filter)
                    .await
                    .map(|records| transform(&records, &filter))
                    .map_err(|e| format!("{e:#}"))
            }
        },
    ));

    // ─── Engine lifecycle ───
    let chart = use_hook(|| Rc::new(RefCell::new(None::<ChartHandle>)));

    let effect_chart = chart.clone();
    use_effect(use_reactive((&container_id,), move |(container_id,)| {
        let mut slot = effect_chart.borrow_mut();
        slot.take();
        if let Some(Ok(series)) = &*data.read() {
            match value_range(&series.points) {
                Some(range) => *slot = ChartHandle::attach(&container_id, series, range),
                None => log::info!("[Sales] chart: no sales data for the current filter"),
            }
        }
    }));

    let drop_chart = chart.clone();
    use_drop(move || {
        drop_chart.borrow_mut().take();
    });

    let (loading, error, empty) = match &*data.read() {
        None => (true, None, false),
        Some(Err(message)) => (false, Some(message.clone()), false),
        Some(Ok(series)) => (false, None, series.is_empty()),
    };

    rsx! {
        div {
            style: "width: 100%; height: 100%;",
            if let Some(message) = error {
                ErrorDisplay { message, label: "Sales query failed".to_string() }
            }
            if empty {
                p {
                    style: "text-align: center; color: #666;",
                    "No sales data for the selected filters."
                }
            }
            ChartContainer {
                id: container_id.clone(),
                loading,
            }
        }
    }
}
