//! Decoding insight results into drawable data.
//!
//! The binding passes results through untouched; chart backends use these
//! helpers to turn the JSON into pie slices or line series. The insights
//! service answers `{}` when an insight has no data for the period.

use anyhow::{anyhow, bail, Context};
use serde::Serialize;
use serde_json::{Map, Value};

/// Display names for insight field ids and action types.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("like", "Likes"),
    ("link_click", "Link clicks"),
    ("post_like", "Post Likes"),
    ("comment", "Comments"),
    ("mobile_app_install", "Mobile App Installations"),
    ("call_to_action_clicks", "CTA Clicks"),
    ("ctr", "CTR"),
    ("canvas_avg_view_percent", "Avg % canvas viewed"),
    ("impressions", "Impressions"),
    ("social_clicks", "Social Clicks"),
    ("website_clicks", "Website Clicks"),
];

/// Human-readable name for a field id; unknown ids are returned unchanged.
pub fn display_name(id: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, name)| *name)
        .unwrap_or(id)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<LinePoint>,
}

/// Numbers arrive either as JSON numbers or as numeric strings (`"0.53"`).
fn number(value: &Value) -> anyhow::Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| anyhow!("{} is not finite", n)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{:?} is not a number", s)),
        other => bail!("expected a number, got {}", other),
    }
}

fn label(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::String(s) => Ok(display_name(s).to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => bail!("expected a label, got {}", other),
    }
}

/// Decode a "sum" result into pie slices.
///
/// Accepted shapes:
/// - `{"labels": [...], "values": [...]}`
/// - `{"like": 12, "comment": "3"}` (action breakdown map)
/// - `[{"label": "A", "value": 1}, ...]` (`name` is accepted for `label`)
pub fn pie_slices(data: &Value) -> anyhow::Result<Vec<PieSlice>> {
    match data {
        Value::Object(map) if map.contains_key("labels") || map.contains_key("values") => {
            labelled_slices(map)
        }
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| -> anyhow::Result<PieSlice> {
                Ok(PieSlice {
                    label: display_name(key).to_string(),
                    value: number(value).with_context(|| format!("slice {}", key))?,
                })
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| -> anyhow::Result<PieSlice> {
                let name = item
                    .get("label")
                    .or_else(|| item.get("name"))
                    .ok_or_else(|| anyhow!("slice {} has no label", i))?;
                let value = item
                    .get("value")
                    .ok_or_else(|| anyhow!("slice {} has no value", i))?;
                Ok(PieSlice {
                    label: label(name)?,
                    value: number(value).with_context(|| format!("slice {}", i))?,
                })
            })
            .collect(),
        other => bail!("cannot draw a pie from {}", other),
    }
}

fn labelled_slices(map: &Map<String, Value>) -> anyhow::Result<Vec<PieSlice>> {
    let labels = map
        .get("labels")
        .and_then(Value::as_array)
        .context("`labels` must be an array")?;
    let values = map
        .get("values")
        .and_then(Value::as_array)
        .context("`values` must be an array")?;
    if labels.len() != values.len() {
        bail!("{} labels but {} values", labels.len(), values.len());
    }
    labels
        .iter()
        .zip(values)
        .map(|(l, v)| -> anyhow::Result<PieSlice> {
            Ok(PieSlice {
                label: label(l)?,
                value: number(v)?,
            })
        })
        .collect()
}

/// Decode an "evolution" result into line series.
///
/// Expects `[{"name": "CTR", "values": [["2017-02-01", "1.2"], ...]}, ...]`.
pub fn line_series(data: &Value) -> anyhow::Result<Vec<LineSeries>> {
    match data {
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Array(items) => items.iter().enumerate().map(|(i, item)| series(i, item)).collect(),
        other => bail!("cannot draw lines from {}", other),
    }
}

fn series(index: usize, item: &Value) -> anyhow::Result<LineSeries> {
    let name = item
        .get("name")
        .ok_or_else(|| anyhow!("series {} has no name", index))
        .and_then(label)?;
    let values = item
        .get("values")
        .and_then(Value::as_array)
        .with_context(|| format!("series {} has no values", name))?;

    let points = values
        .iter()
        .map(|pair| -> anyhow::Result<LinePoint> {
            let (date, value) = match pair.as_array().map(Vec::as_slice) {
                Some([date, value]) => (date, value),
                _ => bail!("series {}: expected [date, value], got {}", name, pair),
            };
            let date = date
                .as_str()
                .with_context(|| format!("series {}: date must be a string", name))?;
            Ok(LinePoint {
                date: date.to_string(),
                value: number(value).with_context(|| format!("series {} at {}", name, date))?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(LineSeries { name, points })
}
