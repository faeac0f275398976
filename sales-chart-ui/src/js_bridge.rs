//! Typed bindings to ECharts (with the echarts-gl extension) via `wasm-bindgen`.
//!
//! `echarts` and `echarts-gl` are loaded as globals by the host page. A
//! [`ChartHandle`] owns one engine instance bound to one DOM element plus the
//! window `resize` listener that keeps it sized; dropping the handle disposes
//! the instance and removes the listener.

use sales_core::option::{build_chart_option, tooltip_text};
use sales_core::series::{ChartSeries, ValueRange};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// An ECharts instance bound to one DOM element.
    #[derive(Clone)]
    pub type ECharts;

    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> ECharts;

    #[wasm_bindgen(method, js_name = setOption)]
    fn set_option(this: &ECharts, option: &JsValue);

    #[wasm_bindgen(method)]
    fn resize(this: &ECharts);

    #[wasm_bindgen(method)]
    fn dispose(this: &ECharts);
}

/// Window `resize` listener, removed again on drop.
struct ResizeListener {
    window: web_sys::Window,
    callback: Closure<dyn Fn()>,
}

impl ResizeListener {
    fn register(chart: ECharts) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn()>::new(move || chart.resize());
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

/// A live 3D bar chart. Never reused: build a new one for new data or a new
/// target.
pub struct ChartHandle {
    container_id: String,
    instance: ECharts,
    _resize: Option<ResizeListener>,
    _formatter: Closure<dyn Fn(JsValue) -> JsValue>,
}

impl ChartHandle {
    /// Create an engine instance on `container_id` and render `series`.
    ///
    /// Returns `None` without side effects when the target element does not
    /// exist yet.
    pub fn attach(container_id: &str, series: &ChartSeries, range: ValueRange) -> Option<Self> {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
        else {
            log::warn!("[Sales] chart: container #{container_id} not found, skipping render");
            return None;
        };

        let option = match js_sys::JSON::parse(&build_chart_option(series, range).to_string()) {
            Ok(option) => option,
            Err(e) => {
                log::error!("[Sales] chart: option did not parse: {e:?}");
                return None;
            }
        };

        let labels = series.clone();
        let formatter = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |params: JsValue| {
            bar_value(&params)
                .and_then(|value| tooltip_text(&labels, &value))
                .map(JsValue::from)
                .unwrap_or(JsValue::UNDEFINED)
        });
        match js_sys::Reflect::get(&option, &JsValue::from_str("tooltip")) {
            Ok(tooltip) if tooltip.is_object() => {
                if let Err(e) =
                    js_sys::Reflect::set(&tooltip, &JsValue::from_str("formatter"), formatter.as_ref())
                {
                    log::warn!("[Sales] chart: could not set tooltip formatter: {e:?}");
                }
            }
            Ok(_) => log::warn!("[Sales] chart: option has no tooltip object, using default tooltip"),
            Err(e) => log::warn!("[Sales] chart: could not read tooltip option: {e:?}"),
        }

        let instance = echarts_init(&element);
        instance.set_option(&option);
        let resize = ResizeListener::register(instance.clone());
        if resize.is_none() {
            log::warn!("[Sales] chart: could not register resize listener");
        }

        log::info!(
            "[Sales] chart: rendered {} bars into #{container_id}",
            series.points.len()
        );
        Some(Self {
            container_id: container_id.to_string(),
            instance,
            _resize: resize,
            _formatter: formatter,
        })
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.instance.dispose();
        log::info!("[Sales] chart: disposed #{}", self.container_id);
    }
}

/// `params.data.value` of a tooltip callback, as numbers.
fn bar_value(params: &JsValue) -> Option<Vec<f64>> {
    let data = js_sys::Reflect::get(params, &JsValue::from_str("data")).ok()?;
    let value = js_sys::Reflect::get(&data, &JsValue::from_str("value")).ok()?;
    let array = value.dyn_into::<js_sys::Array>().ok()?;
    array.iter().map(|v| v.as_f64()).collect()
}
