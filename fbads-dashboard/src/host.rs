//! The dashboard's side of the widget contract: registry, managed calls and
//! chart factory, wired to the page's widget region.

use fbads_chart_ui::charts::D3ChartFactory;
use fbads_chart_ui::dom::DomContainer;
use fbads_chart_ui::host::FetchCommandClient;
use fbads_widget::{
    CallManager, ChartFactory, PendingRender, WidgetConfig, WidgetContext, WidgetRegistry,
    WIDGET_ID,
};
use std::rc::Rc;

/// Identifies the single widget instance this dashboard mounts.
pub const INSTANCE_ID: &str = "insights-widget-1";

/// What the widget region should show for the current selections.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionPlan {
    /// No insight chosen: the region is emptied.
    Clear,
    Mount(WidgetConfig),
}

pub fn plan_region(raw_config: serde_json::Value) -> anyhow::Result<RegionPlan> {
    let config = WidgetConfig::from_value(raw_config)?;
    if config.insight.is_empty() {
        return Ok(RegionPlan::Clear);
    }
    Ok(RegionPlan::Mount(config))
}

pub struct DashboardHost {
    registry: WidgetRegistry,
    calls: CallManager,
    charts: Rc<dyn ChartFactory>,
}

impl DashboardHost {
    /// Plugin commands go to the page's own origin.
    pub fn new() -> Self {
        Self {
            registry: WidgetRegistry::with_insights_widget(),
            calls: CallManager::new(FetchCommandClient::new("")),
            charts: Rc::new(D3ChartFactory::new()),
        }
    }

    /// Replace whatever is in `region_id` with a fresh render of `config`.
    ///
    /// Rendering again stops the previous call for the same instance.
    pub fn mount(&self, region_id: &str, config: &WidgetConfig) -> anyhow::Result<PendingRender> {
        let container = DomContainer::by_id(region_id)?;
        container.clear();

        let context = WidgetContext {
            calls: self.calls.for_widget(INSTANCE_ID),
            charts: self.charts.clone(),
        };
        log::info!("mounting {} ({:?} {})", WIDGET_ID, config.mode, config.insight);
        self.registry.mount(WIDGET_ID, &container, config, &context)
    }

    /// Stop outstanding calls and empty `region_id`.
    pub fn clear(&self, region_id: &str) -> anyhow::Result<()> {
        self.calls.stop_all();
        DomContainer::by_id(region_id)?.clear();
        Ok(())
    }

    /// Whether a newer render has a call in flight.
    pub fn is_busy(&self) -> bool {
        self.calls.is_outstanding(INSTANCE_ID)
    }

    pub fn shutdown(&self) {
        self.calls.stop_all();
    }
}
