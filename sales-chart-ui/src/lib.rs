//! Dioxus components and ECharts bridge for the sales dashboard.
//!
//! This crate provides:
//! - `js_bridge`: typed `wasm-bindgen` bindings to ECharts and the RAII chart handle
//! - `state`: reactive AppState with Dioxus Signals, plus the shared query client
//! - `components`: the 3D chart, the searchable city dropdown and the wiring example

pub mod components;
pub mod js_bridge;
pub mod state;
