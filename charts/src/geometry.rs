//! Plot geometry for area charts: scales, axis ticks, and smoothed paths.
//!
//! DESIGN
//! ======
//! Coordinates are in SVG user units of a fixed-width view box. The X axis is
//! categorical (one slot per merged row, first and last rows on the plot
//! edges); the Y axis is fixed to the percentage domain `[0, 100]`. Curves
//! use monotone cubic interpolation in screen space so a smoothed line never
//! overshoots its samples.

use std::fmt::Write as _;

use crate::ChartRow;

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

pub const VIEW_WIDTH: f64 = 600.0;
pub const Y_DOMAIN_MAX: f64 = 100.0;
pub const Y_TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];
/// Minimum free space between neighbouring X tick labels.
pub const MIN_TICK_GAP: f64 = 40.0;
/// Approximate advance width of one tick-label character at 10px.
pub const TICK_CHAR_WIDTH: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const DEFAULT_MARGIN: Margin = Margin { top: 10.0, right: 10.0, bottom: 24.0, left: 36.0 };

/// A projected sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Contiguous run of samples for one series, with its stroke and fill paths.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSegment {
    pub points: Vec<PlotPoint>,
    pub line: String,
    pub area: String,
}

/// Chart frame of a given pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartLayout {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, margin: DEFAULT_MARGIN }
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        (self.width - self.margin.right).max(self.plot_left())
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.margin.bottom).max(self.plot_top())
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    /// X position of row `index` out of `count` rows.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.plot_left() + self.plot_width() / 2.0;
        }
        self.plot_left() + self.plot_width() * (index as f64) / ((count - 1) as f64)
    }

    /// Distance between neighbouring row slots.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_width(&self, count: usize) -> f64 {
        if count <= 1 {
            return self.plot_width();
        }
        self.plot_width() / ((count - 1) as f64)
    }

    /// Y position of `value`, clamped into the `[0, 100]` domain.
    #[must_use]
    pub fn y_at(&self, value: f64) -> f64 {
        let v = if value.is_finite() { value.clamp(0.0, Y_DOMAIN_MAX) } else { 0.0 };
        self.plot_bottom() - (self.plot_bottom() - self.plot_top()) * (v / Y_DOMAIN_MAX)
    }

    #[must_use]
    pub fn y_ticks(&self) -> Vec<AxisTick> {
        Y_TICKS
            .iter()
            .map(|v| AxisTick { position: self.y_at(*v), label: format!("{v}") })
            .collect()
    }

    /// X axis ticks, thinned so labels keep [`MIN_TICK_GAP`] between them.
    #[must_use]
    pub fn x_ticks(&self, rows: &[ChartRow]) -> Vec<AxisTick> {
        let count = rows.len();
        if count == 0 {
            return Vec::new();
        }
        let stride = tick_stride(rows, self.slot_width(count));
        rows.iter()
            .enumerate()
            .filter(|(i, _)| i % stride == 0)
            .map(|(i, row)| AxisTick { position: self.x_at(i, count), label: row.time.clone() })
            .collect()
    }

    /// Hover band `(x0, x1)` for row `index`, split halfway between slots.
    #[must_use]
    pub fn hover_band(&self, index: usize, count: usize) -> (f64, f64) {
        if count <= 1 {
            return (self.plot_left(), self.plot_right());
        }
        let half = self.slot_width(count) / 2.0;
        let x = self.x_at(index, count);
        ((x - half).max(self.plot_left()), (x + half).min(self.plot_right()))
    }

    /// Project the samples of `key`, split at rows where the series has no
    /// value so gaps stay visible.
    #[must_use]
    pub fn series_segments(&self, rows: &[ChartRow], key: &str) -> Vec<SeriesSegment> {
        let count = rows.len();
        let mut runs: Vec<Vec<PlotPoint>> = Vec::new();
        let mut current: Vec<PlotPoint> = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            match row.value(key) {
                Some(v) => current.push(PlotPoint { index, x: self.x_at(index, count), y: self.y_at(v) }),
                None => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        let baseline = self.plot_bottom();
        runs.into_iter()
            .map(|points| {
                let line = monotone_path(&points);
                let area = area_path(&points, baseline);
                SeriesSegment { points, line, area }
            })
            .collect()
    }
}

/// Smallest stride whose label spacing leaves at least [`MIN_TICK_GAP`].
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_stride(rows: &[ChartRow], slot: f64) -> usize {
    let widest = rows.iter().map(|r| r.time.chars().count()).max().unwrap_or(0) as f64;
    let needed = widest * TICK_CHAR_WIDTH + MIN_TICK_GAP;
    if slot <= 0.0 {
        return rows.len().max(1);
    }
    ((needed / slot).ceil() as usize).max(1)
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangents for monotone cubic interpolation (Steffen's method).
fn monotone_tangents(points: &[PlotPoint]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];
    if n < 2 {
        return tangents;
    }
    let slopes = points
        .windows(2)
        .map(|w| {
            let h = w[1].x - w[0].x;
            if h == 0.0 { 0.0 } else { (w[1].y - w[0].y) / h }
        })
        .collect::<Vec<_>>();

    if n == 2 {
        tangents[0] = slopes[0];
        tangents[1] = slopes[0];
        return tangents;
    }

    for i in 1..n - 1 {
        let h0 = points[i].x - points[i - 1].x;
        let h1 = points[i + 1].x - points[i].x;
        let (s0, s1) = (slopes[i - 1], slopes[i]);
        let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
        tangents[i] = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    }
    tangents[0] = (3.0 * slopes[0] - tangents[1]) / 2.0;
    tangents[n - 1] = (3.0 * slopes[n - 2] - tangents[n - 2]) / 2.0;
    tangents
}

/// SVG path through `points`: a move for one point, a straight line for two,
/// monotone cubic segments otherwise.
#[must_use]
pub fn monotone_path(points: &[PlotPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut d = format!("M{:.2},{:.2}", first.x, first.y);
    if points.len() == 2 {
        let _ = write!(d, "L{:.2},{:.2}", points[1].x, points[1].y);
        return d;
    }
    let tangents = monotone_tangents(points);
    for i in 0..points.len().saturating_sub(1) {
        let (a, b) = (points[i], points[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        let _ = write!(
            d,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            a.x + dx,
            a.y + dx * tangents[i],
            b.x - dx,
            b.y - dx * tangents[i + 1],
            b.x,
            b.y
        );
    }
    d
}

/// Closed fill path: the smoothed line followed by a return along `baseline`.
#[must_use]
pub fn area_path(points: &[PlotPoint], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = monotone_path(points);
    let _ = write!(d, "L{:.2},{baseline:.2}L{:.2},{baseline:.2}Z", last.x, first.x);
    d
}
