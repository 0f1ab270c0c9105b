//! SVG chart geometry shared by the chart components.
//!
//! Everything here is pure math on plot-space coordinates (SVG user units,
//! origin top-left). Components own the markup; these helpers own the numbers
//! so layout can be tested without rendering.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Fraction of each category band left empty around a bar.
pub const BAR_BAND_PADDING: f64 = 0.2;

/// Mantissas tried, in order, when rounding an axis maximum up.
const NICE_STEPS: [f64; 11] = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// Plot area inside an SVG viewBox of `width` x `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Plot {
    /// Plot with room for a y-axis on the left and month labels below.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, left: 44.0, right: 16.0, top: 16.0, bottom: 32.0 }
    }

    /// Same plot with a wider left gutter for category labels.
    #[must_use]
    pub const fn with_left(self, left: f64) -> Self {
        Self { left, ..self }
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Y coordinate of the value axis origin.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    /// Start and width of category band `index` out of `count`.
    #[must_use]
    pub fn x_band(&self, index: usize, count: usize) -> (f64, f64) {
        let band = self.inner_width() / count.max(1) as f64;
        (self.left + band * index as f64, band)
    }

    /// Horizontal center of category band `index`.
    #[must_use]
    pub fn x_center(&self, index: usize, count: usize) -> f64 {
        let (start, band) = self.x_band(index, count);
        start + band / 2.0
    }

    /// Y coordinate for `value` on an axis running from 0 to `max`.
    #[must_use]
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.top + self.inner_height() * (1.0 - ratio)
    }
}

/// Round `value` up to a readable axis maximum (1, 1.2, 1.5, 2, 2.5, 3, 4, 5,
/// 6 or 8 times a power of ten). Non-positive input yields `1.0`.
#[must_use]
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let mantissa = value / magnitude;
    let step = NICE_STEPS
        .iter()
        .copied()
        .find(|step| *step >= mantissa - 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// `segments + 1` evenly spaced tick values from 0 to `max`.
#[must_use]
pub fn ticks(max: f64, segments: usize) -> Vec<f64> {
    let segments = segments.max(1);
    (0..=segments).map(|i| max * i as f64 / segments as f64).collect()
}

/// Tick label without a trailing `.0`.
#[must_use]
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// One point per value, centered in its category band.
#[must_use]
pub fn series_points(plot: &Plot, values: &[f64], max: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (plot.x_center(i, values.len()), plot.y_for(*v, max)))
        .collect()
}

/// Open polyline path `M x,y L x,y ...`. Empty for no points.
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if !path.is_empty() {
            path.push(' ');
        }
        path.push_str(&format!("{cmd}{x:.1},{y:.1}"));
    }
    path
}

/// Closed path that fills between the polyline and `baseline`.
#[must_use]
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = line_path(points);
    path.push_str(&format!(
        " L{:.1},{baseline:.1} L{:.1},{baseline:.1} Z",
        last.0, first.0
    ));
    path
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical bars, one per category band, growing up from the baseline.
#[must_use]
pub fn column_bars(plot: &Plot, values: &[f64], max: f64) -> Vec<BarRect> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let (start, band) = plot.x_band(i, values.len());
            let inset = band * BAR_BAND_PADDING / 2.0;
            let y = plot.y_for(*v, max);
            BarRect { x: start + inset, y, width: band - inset * 2.0, height: plot.baseline() - y }
        })
        .collect()
}

/// Horizontal bars, one per row band, growing right from the left gutter.
#[must_use]
pub fn row_bars(plot: &Plot, values: &[f64], max: f64) -> Vec<BarRect> {
    let band = plot.inner_height() / values.len().max(1) as f64;
    let inset = band * BAR_BAND_PADDING / 2.0;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = if max > 0.0 { (v / max).clamp(0.0, 1.0) } else { 0.0 };
            BarRect {
                x: plot.left,
                y: plot.top + band * i as f64 + inset,
                width: plot.inner_width() * ratio,
                height: band - inset * 2.0,
            }
        })
        .collect()
}

/// Vertical center of row band `index`, for labels beside row bars.
#[must_use]
pub fn row_center(plot: &Plot, index: usize, count: usize) -> f64 {
    let band = plot.inner_height() / count.max(1) as f64;
    plot.top + band * index as f64 + band / 2.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Start angle in radians, measured clockwise from twelve o'clock.
    pub start: f64,
    pub end: f64,
    /// Share of the total, 0..=1.
    pub fraction: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Point on a circle at `angle` radians clockwise from twelve o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + r * theta.cos(), cy + r * theta.sin())
}

/// Wedges for `values` around (`cx`, `cy`). Empty when the total is zero.
#[must_use]
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = v.max(0.0) / total;
            let end = start + fraction * TAU;
            let path = if fraction >= 1.0 - 1e-9 {
                // A full circle cannot be drawn as a single arc.
                format!(
                    "M{:.1},{:.1} A{r:.1},{r:.1} 0 1,1 {:.1},{:.1} A{r:.1},{r:.1} 0 1,1 {:.1},{:.1} Z",
                    cx,
                    cy - r,
                    cx,
                    cy + r,
                    cx,
                    cy - r
                )
            } else {
                let (x0, y0) = polar(cx, cy, r, start);
                let (x1, y1) = polar(cx, cy, r, end);
                let large = i32::from(end - start > std::f64::consts::PI);
                format!("M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{r:.1},{r:.1} 0 {large},1 {x1:.1},{y1:.1} Z")
            };
            let (label_x, label_y) = polar(cx, cy, r * 0.62, (start + end) / 2.0);
            let slice = PieSlice { start, end, fraction, path, label_x, label_y };
            start = end;
            slice
        })
        .collect()
}
