//! Searchable city dropdown with debounced incremental search.
//!
//! Every keystroke cancels the pending timer task and schedules a new one;
//! the [`SearchSession`] generation check drops anything that still slips
//! through, and only the latest request's response is applied.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use sales_core::client::{fetch_cities, QueryClient};
use sales_core::config::SEARCH_DEBOUNCE_MS;
use sales_core::search::{DropdownState, SearchSession};

use crate::state::QueryContext;

static DROPDOWN_CSS: &str = include_str!("../../assets/css/searchable-dropdown.css");

/// Slot holding the currently scheduled search task.
type PendingTask = Rc<Cell<Option<Task>>>;

/// Schedule a debounced search for `term`, superseding any earlier one.
fn schedule_search(
    mut session: Signal<SearchSession>,
    client: Rc<dyn QueryClient>,
    pending: &PendingTask,
    term: String,
) {
    let scheduled = session.write().input(term);
    if let Some(previous) = pending.take() {
        previous.cancel();
    }
    let task = spawn(async move {
        TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
        let Some(request) = session.write().fire(&scheduled) else {
            return;
        };
        let result = fetch_cities(&*client, &request.term).await;
        session.write().complete(request.seq, result);
    });
    pending.set(Some(task));
}

/// City search box. Picking a candidate writes it to `selected_city`.
#[component]
pub fn SearchableDropdown(selected_city: Option<Signal<String>>) -> Element {
    let query = use_context::<QueryContext>();
    let mut session = use_signal(SearchSession::new);
    let mut dropdown = use_signal(DropdownState::default);
    let pending: PendingTask = use_hook(|| Rc::new(Cell::new(None)));

    // Initial unfiltered search so the list is populated before typing.
    use_hook({
        let client = query.client();
        let pending = pending.clone();
        move || schedule_search(session, client, &pending, String::new())
    });

    use_drop({
        let pending = pending.clone();
        move || {
            if let Some(task) = pending.take() {
                task.cancel();
            }
            if let Ok(mut search) = session.try_write() {
                search.cancel();
            }
        }
    });

    let on_input = {
        let query = query.clone();
        let pending = pending.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            dropdown.write().set_text(value.clone());
            schedule_search(session, query.client(), &pending, value);
        }
    };

    let on_clear = {
        let query = query.clone();
        let pending = pending.clone();
        move |evt: MouseEvent| {
            // keep the wrapper's toggle handler from also firing
            evt.stop_propagation();
            dropdown.write().clear();
            if let Some(mut slot) = selected_city {
                slot.set(String::new());
            }
            schedule_search(session, query.client(), &pending, String::new());
        }
    };

    let state = dropdown.read().clone();
    let (loading, cities) = {
        let search = session.read();
        (search.is_loading(), search.cities().to_vec())
    };

    rsx! {
        style { "{DROPDOWN_CSS}" }
        div {
            class: if state.expanded { "searchable-dropdown expanded" } else { "searchable-dropdown" },
            div {
                class: "input-wrapper",
                onclick: move |_| dropdown.write().toggle(),
                input {
                    r#type: "text",
                    class: "searchable-dropdown-input",
                    placeholder: "Search cities...",
                    value: "{state.text}",
                    oninput: on_input,
                }
                if state.shows_clear() {
                    button {
                        class: "clear-button",
                        onclick: on_clear,
                        "×"
                    }
                }
            }
            div {
                class: "dropdown-list",
                if loading {
                    div { class: "loading-message", "Loading..." }
                } else if cities.is_empty() {
                    div { class: "no-results-message", "No cities found" }
                } else {
                    for city in cities {
                        div {
                            key: "{city}",
                            class: "city-option",
                            onclick: {
                                let city = city.clone();
                                move |_| {
                                    if let Some(mut slot) = selected_city {
                                        slot.set(city.clone());
                                    }
                                    dropdown.write().select(&city);
                                }
                            },
                            "{city}"
                        }
                    }
                }
            }
        }
    }
}
