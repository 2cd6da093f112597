//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the widget configuration being edited and the status of
//! the last render into signals provided via `use_context_provider`. Child
//! components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use fbads_widget::RenderOutcome;
use serde_json::json;

/// Shared state of the insights dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Widget `type`: "sum" or "evolution"
    pub mode: Signal<String>,
    /// Insight identifier, e.g. "campaign/6051"
    pub insight: Signal<String>,
    /// Ad account forwarded in the service config
    pub account: Signal<String>,
    /// Whether a render is waiting for its remote call
    pub loading: Signal<bool>,
    /// Error outside the chart (mount failures)
    pub error_msg: Signal<Option<String>>,
    /// How the last render settled
    pub last_outcome: Signal<Option<RenderOutcome>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            mode: Signal::new("sum".to_string()),
            insight: Signal::new(String::new()),
            account: Signal::new(String::new()),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            last_outcome: Signal::new(None),
        }
    }

    /// The host-side JSON config for the current selections.
    pub fn widget_config(&self) -> serde_json::Value {
        json!({
            "type": (self.mode)(),
            "insight": (self.insight)(),
            "service": {"config": {"account": (self.account)()}},
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
