//! Shared look of the paper figures (sizes scale with the canvas).

use std::ops::Range;

use plotters::prelude::*;

pub const FONT: &str = "sans-serif";

pub const STRETCH_COLOR: RGBColor = BLUE;
pub const LCDM_COLOR: RGBColor = RED;
pub const CPL_COLOR: RGBColor = RGBColor(0, 128, 0);
pub const DATA_COLOR: RGBColor = BLACK;
pub const TRUTH_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Pixel metrics for one canvas size. Reference is 800 px wide (8 in at 100 dpi).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub caption: u32,
    pub label: u32,
    pub tick: u32,
    pub legend: u32,
    pub stroke: u32,
    pub marker: u32,
    pub cap: u32,
    pub margin: u32,
    pub x_area: u32,
    pub y_area: u32,
    pub dash: u32,
    pub gap: u32,
}

impl Metrics {
    pub fn for_canvas(width: u32) -> Self {
        let s = (width as f64 / 800.0).max(0.25);
        let px = |v: f64| ((v * s).round() as u32).max(1);
        Self {
            caption: px(20.0),
            label: px(16.0),
            tick: px(12.0),
            legend: px(14.0),
            stroke: px(1.5),
            marker: px(4.0),
            cap: px(8.0),
            margin: px(12.0),
            x_area: px(50.0),
            y_area: px(80.0),
            dash: px(8.0),
            gap: px(5.0),
        }
    }
}

/// `[min, max]` of the finite values widened by `frac` of the span on both sides.
pub fn padded_range<I>(values: I, frac: f64) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }
    let span = hi - lo;
    if span.abs() < 1e-12 * hi.abs().max(1e-300) {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        return (lo - pad)..(hi + pad);
    }
    (lo - frac * span)..(hi + frac * span)
}

/// Same as [`padded_range`] but multiplicative, for log axes.
pub fn log_range<I>(values: I, factor: f64) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return 1e-12..1.0;
    }
    (lo / factor)..(hi * factor)
}

/// Tick text that stays readable from 1e-18 to 1e3.
pub fn tick_label(v: &f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-3..1e5).contains(&a) {
        format!("{v:.2e}")
    } else if a >= 100.0 {
        format!("{v:.0}")
    } else {
        let mut s = format!("{v:.3}");
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s == "-0" { "0".to_string() } else { s }
    }
}
