//! Series model and merge helpers for console time-series charts.
//!
//! This crate is UI-framework agnostic so the client crate can consume it
//! directly for rendering, and so the merge/geometry rules can be tested
//! without a browser.

pub mod geometry;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Series key used when a single flat point list is wrapped as a series.
pub const SINGLE_SERIES_KEY: &str = "value";
pub const DEFAULT_COLOR: &str = "#1B58F4";
pub const DEFAULT_LABEL: &str = "Utilization";
pub const DEFAULT_UNIT: &str = "%";
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// One timestamped sample. `value` is a percentage in `[0, 100]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: String,
    pub value: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self { time: time.into(), value }
    }
}

/// A named, colored, ordered sequence of samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub name: String,
    pub color: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, color: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self { key: key.into(), name: name.into(), color: color.into(), points }
    }
}

/// One merged row of the chart frame. Series without a sample at `time` are
/// absent from `values`, which renders as a gap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub time: String,
    pub values: BTreeMap<String, f64>,
}

impl ChartRow {
    #[must_use]
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Chart input in either of the two supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    /// Flat point list rendered as one series under [`SINGLE_SERIES_KEY`].
    Single { points: Vec<SeriesPoint>, label: String, color: String },
    /// Independently sampled series merged by time label.
    Multi(Vec<Series>),
}

impl ChartData {
    /// Series that get an area, a gradient and a legend entry.
    #[must_use]
    pub fn series(&self) -> Vec<Series> {
        match self {
            Self::Single { points, label, color } => vec![single_series(points.clone(), label, color)],
            Self::Multi(series) => series.clone(),
        }
    }

    /// Chart-ready rows.
    ///
    /// Single input keeps the caller's order; multi input is merged and
    /// sorted by time label.
    #[must_use]
    pub fn rows(&self) -> Vec<ChartRow> {
        match self {
            Self::Single { points, .. } => points
                .iter()
                .map(|p| ChartRow {
                    time: p.time.clone(),
                    values: BTreeMap::from([(SINGLE_SERIES_KEY.to_owned(), p.value)]),
                })
                .collect(),
            Self::Multi(series) => merge_series(series),
        }
    }
}

/// Wrap a flat point list as a single series.
#[must_use]
pub fn single_series(points: Vec<SeriesPoint>, label: &str, color: &str) -> Series {
    Series::new(SINGLE_SERIES_KEY, label, color, points)
}

/// Merge series into rows keyed by time label, ordered by ascending string
/// comparison of the label.
///
/// Rows are the union of all labels. A later point for the same series and
/// label overwrites the earlier one.
#[must_use]
pub fn merge_series(series: &[Series]) -> Vec<ChartRow> {
    let mut by_time = BTreeMap::<String, ChartRow>::new();
    for s in series {
        for point in &s.points {
            let row = by_time.entry(point.time.clone()).or_insert_with(|| ChartRow {
                time: point.time.clone(),
                values: BTreeMap::new(),
            });
            row.values.insert(s.key.clone(), point.value);
        }
    }
    by_time.into_values().collect()
}

/// Rounded value with its unit suffix, e.g. `58%`.
#[must_use]
pub fn format_value(value: f64, unit: &str) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    format!("{rounded}{unit}")
}

/// Gradient definition id for one series of one chart instance.
#[must_use]
pub fn gradient_id(chart_id: &str, series_key: &str) -> String {
    format!("color-{chart_id}-{series_key}")
}

/// One line of the hover tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub color: String,
    pub text: String,
}

/// Tooltip content for a hovered row.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub time: String,
    pub entries: Vec<TooltipEntry>,
}

/// Build the tooltip for `row`, listing series in declaration order and
/// skipping series with no sample in that row.
#[must_use]
pub fn tooltip(row: &ChartRow, series: &[Series], unit: &str) -> Tooltip {
    let entries = series
        .iter()
        .filter_map(|s| {
            row.value(&s.key).map(|v| TooltipEntry {
                name: s.name.clone(),
                color: s.color.clone(),
                text: format_value(v, unit),
            })
        })
        .collect();
    Tooltip { time: row.time.clone(), entries }
}
