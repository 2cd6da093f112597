//! Advertising insights dashboard
//!
//! Hosts the insights widget in a single page: the user picks a chart mode,
//! an insight id and an ad account, and the widget is re-rendered into the
//! widget region through the registry.
//!
//! Data flow:
//! 1. On mount: build the registry, managed-call manager and D3 chart factory.
//! 2. On any selection change: clear the region and mount the widget again.
//!    The widget's previous call is stopped by the call manager. With no
//!    insight chosen the region is only cleared.
//! 3. The pending render is spawned; its outcome drives the loading overlay.

mod host;

use fbads_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, InsightPicker, LoadingSpinner, ModeSelector,
};
use fbads_chart_ui::state::AppState;
use dioxus::prelude::*;
use host::{plan_region, DashboardHost, RegionPlan};
use std::rc::Rc;

/// DOM id of the region the widget mounts into.
const WIDGET_REGION_ID: &str = "insights-widget-region";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fbads-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let host = use_hook(|| Rc::new(DashboardHost::new()));

    let teardown_host = host.clone();
    use_drop(move || teardown_host.shutdown());

    // ─── Effect: re-render the widget whenever the selections change ───
    let effect_host = host.clone();
    use_effect(move || {
        let raw_config = state.widget_config();

        let config = match plan_region(raw_config) {
            Ok(RegionPlan::Mount(config)) => config,
            Ok(RegionPlan::Clear) => {
                if let Err(e) = effect_host.clear(WIDGET_REGION_ID) {
                    log::warn!("failed to clear widget region: {:#}", e);
                }
                state.loading.set(false);
                return;
            }
            Err(e) => {
                log::error!("invalid widget config: {:#}", e);
                state.loading.set(false);
                state.error_msg.set(Some(format!("{:#}", e)));
                return;
            }
        };

        match effect_host.mount(WIDGET_REGION_ID, &config) {
            Ok(pending) => {
                state.error_msg.set(None);
                if pending.is_ignored() {
                    state.loading.set(false);
                    state.last_outcome.set(Some(fbads_widget::RenderOutcome::Ignored));
                    return;
                }
                state.loading.set(true);
                let settle_host = effect_host.clone();
                spawn(async move {
                    let outcome = pending.await;
                    // A stopped render settles after its replacement started.
                    if settle_host.is_busy() {
                        return;
                    }
                    state.loading.set(false);
                    state.last_outcome.set(Some(outcome));
                });
            }
            Err(e) => {
                log::error!("failed to mount insights widget: {:#}", e);
                state.loading.set(false);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
    });

    let title = match (state.mode)().as_str() {
        "evolution" => "Ad insights over time",
        _ => "Ad insights by action",
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            ChartHeader {
                title: title.to_string(),
                insight: (state.insight)(),
            }

            ChartContainer {
                id: WIDGET_REGION_ID.to_string(),
                loading: *state.loading.read(),
                min_height: 340,
            }

            if (state.insight)().is_empty() {
                LoadingSpinner { label: "Enter an insight id to load data.".to_string() }
            }

            SettingsSection {}
        }
    }
}

/// Widget settings: chart mode, insight and account.
#[component]
fn SettingsSection() -> Element {
    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            p {
                style: "font-size: 12px; color: #666; margin: 0 0 4px 0;",
                "Choose what the widget shows:"
            }
            ModeSelector {}
            InsightPicker {}
        }
    }
}
