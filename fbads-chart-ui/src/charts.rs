//! D3.js-backed implementations of the widget's chart seams.

use crate::js_bridge;
use fbads_widget::insight::{line_series, pie_slices};
use fbads_widget::{Chart, ChartFactory, ChartKind, ChartOptions, MountPoint, RemoteCallFailure};
use serde_json::Value;

/// Whether a call failure should be drawn into the chart.
///
/// A cancelled call belongs to a chart that has been replaced, and its
/// element is already gone from the page.
pub fn should_render_error(error: &RemoteCallFailure) -> bool {
    !matches!(error, RemoteCallFailure::Cancelled)
}

fn render_error(container_id: &str, error: &RemoteCallFailure) {
    if !should_render_error(error) {
        log::debug!("[FBADS] #{} replaced, dropping {}", container_id, error);
        return;
    }
    js_bridge::render_chart_error(container_id, &error.message());
}

/// Pie chart; a donut when `hole` is set.
pub struct D3PieChart {
    container_id: String,
    options: ChartOptions,
}

impl D3PieChart {
    pub fn new(mount: &MountPoint) -> Self {
        Self {
            container_id: mount.id.clone(),
            options: ChartOptions::default(),
        }
    }
}

impl Chart for D3PieChart {
    fn update_config(&mut self, options: ChartOptions) {
        self.options.merge(options);
    }

    fn set_data(&mut self, data: Value) {
        match pie_slices(&data) {
            Ok(slices) => {
                let data_json = serde_json::to_string(&slices).unwrap_or_default();
                let config_json = serde_json::to_string(&self.options).unwrap_or_default();
                js_bridge::render_pie_chart(&self.container_id, &data_json, &config_json);
            }
            Err(e) => {
                log::warn!("[FBADS] undrawable pie data for #{}: {:#}", self.container_id, e);
                js_bridge::render_chart_error(&self.container_id, &format!("Unexpected data: {}", e));
            }
        }
    }

    fn set_error(&mut self, error: RemoteCallFailure) {
        render_error(&self.container_id, &error);
    }
}

/// One line per insight field over time.
pub struct D3LineGraph {
    container_id: String,
    options: ChartOptions,
}

impl D3LineGraph {
    pub fn new(mount: &MountPoint) -> Self {
        Self {
            container_id: mount.id.clone(),
            options: ChartOptions::default(),
        }
    }
}

impl Chart for D3LineGraph {
    fn update_config(&mut self, options: ChartOptions) {
        self.options.merge(options);
    }

    fn set_data(&mut self, data: Value) {
        match line_series(&data) {
            Ok(series) => {
                let data_json = serde_json::to_string(&series).unwrap_or_default();
                let config_json = serde_json::to_string(&self.options).unwrap_or_default();
                js_bridge::render_line_chart(&self.container_id, &data_json, &config_json);
            }
            Err(e) => {
                log::warn!("[FBADS] undrawable line data for #{}: {:#}", self.container_id, e);
                js_bridge::render_chart_error(&self.container_id, &format!("Unexpected data: {}", e));
            }
        }
    }

    fn set_error(&mut self, error: RemoteCallFailure) {
        render_error(&self.container_id, &error);
    }
}

/// Creates D3 charts; loads the chart scripts on construction.
pub struct D3ChartFactory;

impl D3ChartFactory {
    pub fn new() -> Self {
        js_bridge::init_charts();
        Self
    }
}

impl Default for D3ChartFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFactory for D3ChartFactory {
    fn create(&self, kind: ChartKind, mount: &MountPoint) -> Box<dyn Chart> {
        match kind {
            ChartKind::Pie => Box::new(D3PieChart::new(mount)),
            ChartKind::Line => Box::new(D3LineGraph::new(mount)),
        }
    }
}
