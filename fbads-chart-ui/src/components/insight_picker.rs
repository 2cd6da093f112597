//! Insight id and ad account inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Text inputs for the insight identifier and the ad account.
///
/// Values are committed on change (blur or enter), so typing does not fire a
/// remote call per keystroke.
#[component]
pub fn InsightPicker() -> Element {
    let mut state = use_context::<AppState>();
    let insight = (state.insight)();
    let account = (state.account)();

    let on_insight_change = move |evt: Event<FormData>| {
        state.insight.set(evt.value().trim().to_string());
    };

    let on_account_change = move |evt: Event<FormData>| {
        state.account.set(evt.value().trim().to_string());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Insight: "
                input {
                    r#type: "text",
                    placeholder: "campaign/6051",
                    value: "{insight}",
                    onchange: on_insight_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "Account: "
                input {
                    r#type: "text",
                    placeholder: "act_123",
                    value: "{account}",
                    onchange: on_account_change,
                }
            }
        }
    }
}
