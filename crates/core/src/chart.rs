//! SVG geometry for the market charts.
//!
//! The line chart maps monthly prices onto a plot area; the pie chart turns
//! the type distribution into arc paths. Both return plain data so the view
//! only has to emit `<path>`/`<circle>` elements.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

use crate::models::{Category, MarketTrendPoint, TypeDistribution};

/// Slice colours, in distribution order.
pub const PIE_PALETTE: [&str; 4] = ["#4A90E2", "#7D7D7D", "#355E3B", "#D2B48C"];

/// Price axis tick spacing in €/m².
const TICK_STEP: u32 = 100;

/// Outer box and inner margins of a chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 30.0,
        }
    }
}

impl Frame {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.margin_left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.margin_top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// A plotted month.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: u32,
}

/// Horizontal grid line with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: u32,
}

/// Line chart layout for the price trend.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub frame: Frame,
    pub points: Vec<ChartPoint>,
    pub ticks: Vec<Tick>,
}

impl LineChart {
    /// Lay out `data` in `frame`. The value axis does not start at zero; it
    /// spans the data rounded outwards to whole ticks.
    #[must_use]
    pub fn new(data: &[MarketTrendPoint], frame: Frame) -> Self {
        let (lo, hi) = value_range(data);
        let span = f64::from(hi - lo);
        let plot_w = frame.right() - frame.left();
        let plot_h = frame.bottom() - frame.top();
        let y_of = |value: u32| frame.bottom() - (f64::from(value) - f64::from(lo)) / span * plot_h;

        let last = data.len().saturating_sub(1);
        let points = data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = if last == 0 {
                    frame.left() + plot_w / 2.0
                } else {
                    frame.left() + ratio(i, last) * plot_w
                };
                ChartPoint {
                    x,
                    y: y_of(point.price_per_m2),
                    label: point.month.clone(),
                    value: point.price_per_m2,
                }
            })
            .collect();

        let ticks = (lo..=hi)
            .step_by(TICK_STEP as usize)
            .map(|value| Tick {
                y: y_of(value),
                value,
            })
            .collect();

        Self {
            frame,
            points,
            ticks,
        }
    }

    /// `d` attribute of the polyline through every point.
    #[must_use]
    pub fn line_path(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{:.2},{:.2} ", p.x, p.y);
        }
        d.trim_end().to_string()
    }

    /// `d` attribute of the filled area under the line.
    #[must_use]
    pub fn area_path(&self) -> String {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => format!(
                "{} L{:.2},{:.2} L{:.2},{:.2} Z",
                self.line_path(),
                last.x,
                self.frame.bottom(),
                first.x,
                self.frame.bottom()
            ),
            _ => String::new(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(i: usize, of: usize) -> f64 {
    i as f64 / of as f64
}

fn value_range(data: &[MarketTrendPoint]) -> (u32, u32) {
    let min = data.iter().map(|p| p.price_per_m2).min().unwrap_or(0);
    let max = data.iter().map(|p| p.price_per_m2).max().unwrap_or(0);
    let lo = min / TICK_STEP * TICK_STEP;
    let hi = max.div_ceil(TICK_STEP).saturating_mul(TICK_STEP);
    if hi > lo {
        (lo, hi)
    } else {
        (lo, lo.saturating_add(TICK_STEP))
    }
}

/// One pie wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: Category,
    pub percent: u32,
    pub color: &'static str,
    /// Radians, clockwise from twelve o'clock
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
}

impl PieSlice {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Wedges for `distribution` around `(cx, cy)`.
///
/// Shares are normalised to their total so the wedges always close the
/// circle. A zero total yields no wedges.
#[must_use]
pub fn pie_slices(distribution: &TypeDistribution, cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total = distribution.total();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    distribution
        .shares()
        .iter()
        .zip(PIE_PALETTE.iter().cycle())
        .map(|(share, color)| {
            let sweep = f64::from(share.percent) / f64::from(total) * TAU;
            let end = start + sweep;
            let slice = PieSlice {
                category: share.category,
                percent: share.percent,
                color: *color,
                start_angle: start,
                end_angle: end,
                path: wedge_path(cx, cy, radius, start, end),
            };
            start = end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

fn wedge_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep <= 0.0 {
        return String::new();
    }
    let (x0, y0) = polar(cx, cy, radius, start);
    if sweep >= TAU - 1e-9 {
        // A single arc cannot close on itself; split at the antipode.
        let (xm, ym) = polar(cx, cy, radius, start + TAU / 2.0);
        return format!(
            "M{x0:.2},{y0:.2} A{radius},{radius} 0 1 1 {xm:.2},{ym:.2} A{radius},{radius} 0 1 1 {x0:.2},{y0:.2} Z"
        );
    }
    let (x1, y1) = polar(cx, cy, radius, end);
    let large = u8::from(sweep > TAU / 2.0);
    format!("M{cx},{cy} L{x0:.2},{y0:.2} A{radius},{radius} 0 {large} 1 {x1:.2},{y1:.2} Z")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_points_span_plot_area() {
        let frame = Frame::default();
        let chart = LineChart::new(&data::market_trends(), frame);
        assert_eq!(chart.points.len(), 12);
        let first = chart.points.first().map(|p| p.x);
        let last = chart.points.last().map(|p| p.x);
        assert_eq!(first, Some(frame.left()));
        assert!(last.is_some_and(|x| (x - frame.right()).abs() < 1e-9));
        assert!(chart.points.windows(2).all(|w| match w {
            [a, b] => a.x < b.x && a.y > b.y,
            _ => false,
        }));
    }

    #[test]
    fn test_ticks_cover_data() {
        let chart = LineChart::new(&data::market_trends(), Frame::default());
        assert_eq!(chart.ticks.first().map(|t| t.value), Some(4500));
        assert_eq!(chart.ticks.last().map(|t| t.value), Some(5100));
    }

    #[test]
    fn test_single_point_is_centered() {
        let frame = Frame::default();
        let chart = LineChart::new(&[MarketTrendPoint::new("Jan", 4500)], frame);
        let x = chart.points.first().map(|p| p.x);
        assert_eq!(x, Some(frame.left() + (frame.right() - frame.left()) / 2.0));
        assert!(chart.area_path().ends_with('Z'));
    }

    #[test]
    fn test_empty_chart_has_no_paths() {
        let chart = LineChart::new(&[], Frame::default());
        assert!(chart.line_path().is_empty());
        assert!(chart.area_path().is_empty());
    }

    #[test]
    fn test_pie_angles_sum_to_full_turn() -> crate::Result<()> {
        let slices = pie_slices(&data::type_distribution()?, 100.0, 100.0, 80.0);
        assert_eq!(slices.len(), 4);
        let total: f64 = slices.iter().map(PieSlice::sweep).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert_eq!(slices.first().map(|s| s.color), Some("#4A90E2"));
        Ok(())
    }

    #[test]
    fn test_full_circle_slice_uses_two_arcs() -> crate::Result<()> {
        let distribution = TypeDistribution::new([(Category::House, 100)])?;
        let slices = pie_slices(&distribution, 50.0, 50.0, 40.0);
        let path = slices.first().map(|s| s.path.clone()).unwrap_or_default();
        assert_eq!(path.matches('A').count(), 2);
        Ok(())
    }
}
