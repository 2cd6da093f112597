//! Widget configuration as supplied by the dashboard host.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which chart the widget draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Totals for the period, broken down by action type (pie chart).
    Sum,
    /// Daily values over the period (line chart).
    Evolution,
    /// Any other `type` string; renders nothing.
    #[serde(other)]
    Unrecognized,
}

/// Reference to the configured ad-account service, forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// `{ type, insight, service: { config } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(rename = "type")]
    pub mode: ChartMode,
    /// Insight identifier, e.g. `"campaign/6051"`.
    pub insight: String,
    #[serde(default)]
    pub service: ServiceRef,
}

impl WidgetConfig {
    /// Parse the host's JSON config object.
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Params of one `get_insights` call. Lives for exactly one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightQueryParams {
    pub insight_id: String,
    /// Segment by action type instead of by day. True only for [`ChartMode::Sum`].
    pub action_breakdown: bool,
    pub service: ServiceRef,
}

impl InsightQueryParams {
    pub fn new(config: &WidgetConfig, action_breakdown: bool) -> Self {
        Self {
            insight_id: config.insight.clone(),
            action_breakdown,
            service: config.service.clone(),
        }
    }

    pub fn to_value(&self) -> Value {
        // Only string keys and plain JSON values, so serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
