//! Seams to the charting library and to the host's mounting target.

use crate::error::RemoteCallFailure;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two chart types the widget can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
}

/// Options passed to [`Chart::update_config`]. Unset fields keep the backend default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Inner radius of a pie as a fraction of the outer radius (0 = full pie).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
}

impl ChartOptions {
    /// Options for a donut chart with the given hole ratio.
    pub fn donut(hole: f64) -> Self {
        Self { hole: Some(hole) }
    }

    /// Overlay `other` on top of `self`, keeping fields `other` leaves unset.
    pub fn merge(&mut self, other: ChartOptions) {
        if other.hole.is_some() {
            self.hole = other.hole;
        }
    }
}

/// A chart instance bound to one mount point.
pub trait Chart {
    fn update_config(&mut self, options: ChartOptions);
    /// Draw the insight result. The value is whatever the remote call returned.
    fn set_data(&mut self, data: Value);
    /// Replace the chart with an error state.
    fn set_error(&mut self, error: RemoteCallFailure);
}

/// Constructs chart instances against a mount point.
pub trait ChartFactory {
    fn create(&self, kind: ChartKind, mount: &MountPoint) -> Box<dyn Chart>;
}

/// A freshly created child element charts render into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint {
    /// DOM id of the element.
    pub id: String,
}

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Host-provided region a widget instance may populate.
pub trait Container {
    /// Create a new child element under this container.
    fn append_child(&self) -> anyhow::Result<MountPoint>;
}
