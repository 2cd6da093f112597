//! Widget registry: widget-type identifier to render function.
//!
//! Populated once when the host starts, then consulted every time the host
//! mounts a widget instance.

use crate::binding::{render, PendingRender, WidgetContext};
use crate::chart::Container;
use crate::config::WidgetConfig;
use crate::WIDGET_ID;
use std::collections::HashMap;
use std::rc::Rc;

/// A registered render function.
pub type RenderFn =
    Rc<dyn Fn(&dyn Container, &WidgetConfig, &WidgetContext) -> anyhow::Result<PendingRender>>;

#[derive(Clone, Default)]
pub struct WidgetRegistry {
    widgets: HashMap<String, RenderFn>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the insights widget already installed.
    pub fn with_insights_widget() -> Self {
        let mut registry = Self::new();
        register(&mut registry);
        registry
    }

    /// Register `render_fn` for `widget_id`, replacing any earlier registration.
    pub fn add_widget<F>(&mut self, widget_id: impl Into<String>, render_fn: F)
    where
        F: Fn(&dyn Container, &WidgetConfig, &WidgetContext) -> anyhow::Result<PendingRender>
            + 'static,
    {
        let widget_id = widget_id.into();
        if self.widgets.contains_key(&widget_id) {
            log::warn!("widget {} registered twice; keeping the latest", widget_id);
        } else {
            log::info!("registered widget {}", widget_id);
        }
        self.widgets.insert(widget_id, Rc::new(render_fn));
    }

    pub fn contains(&self, widget_id: &str) -> bool {
        self.widgets.contains_key(widget_id)
    }

    /// Registered widget ids, sorted.
    pub fn widget_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.widgets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Look up `widget_id` and render one instance of it.
    pub fn mount(
        &self,
        widget_id: &str,
        container: &dyn Container,
        config: &WidgetConfig,
        context: &WidgetContext,
    ) -> anyhow::Result<PendingRender> {
        let render_fn = self
            .widgets
            .get(widget_id)
            .ok_or_else(|| anyhow::anyhow!("no widget registered as {}", widget_id))?;
        render_fn(container, config, context)
    }
}

/// Install the insights widget under [`WIDGET_ID`].
pub fn register(registry: &mut WidgetRegistry) {
    registry.add_widget(WIDGET_ID, render);
}
