//! Wiring example: forwards its input to a shared slot and relays clicks.

use dioxus::prelude::*;
use sales_core::dummy::forwarded;

#[component]
pub fn Dummy(
    dummy_input: Option<String>,
    dummy_output: Option<Signal<String>>,
    an_event: EventHandler,
) -> Element {
    use_effect(use_reactive((&dummy_input,), move |(dummy_input,)| {
        if let (Some(value), Some(mut slot)) = (forwarded(dummy_input.as_deref()), dummy_output) {
            slot.set(value.to_string());
        }
    }));

    let text = dummy_input.unwrap_or_default();

    rsx! {
        div {
            onclick: move |_| an_event.call(()),
            "{text}"
        }
    }
}
