//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the shared reactive slots into a single struct provided
//! via `use_context_provider`. Components receive the slots they write as
//! props, so none of them assumes exclusive ownership.
//!
//! The query client is provided separately as a [`QueryContext`] and
//! retrieved with `use_context::<QueryContext>()`.

use std::rc::Rc;

use dioxus::prelude::*;
use sales_core::client::QueryClient;
use sales_core::config::DEFAULT_CITY;

/// Shared application state for the dashboard shell.
#[derive(Clone, Copy)]
pub struct AppState {
    /// City picked in the search dropdown ("" means all cities)
    pub selected_city: Signal<String>,
    /// Output slot written by the dummy component
    pub dummy_output: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            selected_city: Signal::new(DEFAULT_CITY.to_string()),
            dummy_output: Signal::new(String::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The query client shared by every data-fetching component.
#[derive(Clone)]
pub struct QueryContext(Rc<dyn QueryClient>);

impl QueryContext {
    pub fn new(client: impl QueryClient + 'static) -> Self {
        Self(Rc::new(client))
    }

    pub fn client(&self) -> Rc<dyn QueryClient> {
        Rc::clone(&self.0)
    }
}
