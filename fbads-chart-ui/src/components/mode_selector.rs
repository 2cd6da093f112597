//! Chart mode selector.

use crate::state::AppState;
use dioxus::prelude::*;

/// Dropdown selector for the widget `type`.
#[component]
pub fn ModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_mode = (state.mode)();

    let on_mode_change = move |evt: Event<FormData>| {
        state.mode.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Show: "
                select {
                    onchange: on_mode_change,
                    option {
                        value: "sum",
                        selected: current_mode == "sum",
                        "Totals by action"
                    }
                    option {
                        value: "evolution",
                        selected: current_mode == "evolution",
                        "Daily evolution"
                    }
                }
            }
        }
    }
}
