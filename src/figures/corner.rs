//! Figure 3: corner plot of the mock posterior.
//!
//! Diagonal panels hold the 1-D marginals with the 16/50/84 % quantiles and
//! the input value; panels below the diagonal hold 2-D histograms.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, FONT, Metrics, TRUTH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::config::FigureConfig;
use crate::cosmo::posterior::{Posterior, Summary, histogram, histogram_2d, posterior_params};
use crate::error::Result;

pub const MARGINAL_BINS: usize = 30;
pub const JOINT_BINS: usize = 25;

pub fn compute(cfg: &FigureConfig) -> Result<Posterior> {
    Posterior::draw(
        &posterior_params(&cfg.stretch),
        cfg.sampling.posterior_samples,
        cfg.sampling.seed,
    )
}

/// `median +plus -minus` with precision suited to the magnitude.
pub fn format_summary(s: &Summary) -> String {
    let fmt = |v: f64| {
        if v != 0.0 && v.abs() < 1e-3 {
            format!("{v:.2e}")
        } else {
            format!("{v:.3}")
        }
    };
    format!("{} +{} -{}", fmt(s.median), fmt(s.plus()), fmt(s.minus()))
}

pub(crate) fn render(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let post = compute(&ctx.config)?;
    let m = ctx.metrics();
    let dim = post.dim();

    let columns: Vec<Column<'_>> = post
        .params
        .iter()
        .zip(&post.samples)
        .map(|(p, col)| Column::new(p.name, col))
        .collect();
    maybe_write_csv(ctx, Figure::Corner, &columns)?;

    let extents: Vec<(f64, f64)> = (0..dim).map(|i| post.extent(i)).collect();

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((dim, dim));

    for (idx, panel) in panels.iter().enumerate() {
        let (row, col) = (idx / dim, idx % dim);
        let bottom = row + 1 == dim;
        if row == col {
            draw_marginal(panel, &post, row, extents[row], m, bottom)?;
        } else if row > col {
            draw_joint(panel, &post, (col, row), (extents[col], extents[row]), m, bottom)?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_marginal(
    panel: &DrawingArea<BitMapBackend<'_>, Shift>,
    post: &Posterior,
    i: usize,
    (lo, hi): (f64, f64),
    m: Metrics,
    bottom: bool,
) -> PlotResult {
    let param = &post.params[i];
    let summary = post.summary(i);
    let counts = histogram(&post.samples[i], lo, hi, MARGINAL_BINS);
    let width = (hi - lo) / MARGINAL_BINS as f64;
    let y_max = counts.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(panel)
        .caption(
            format!("{} = {}", param.label, format_summary(&summary)),
            (FONT, m.tick),
        )
        .margin(m.margin / 2)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(lo..hi, 0.0..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_labels(4)
        .y_labels(0)
        .label_style((FONT, m.tick))
        .axis_desc_style((FONT, m.label))
        .x_label_formatter(&style::tick_label);
    if bottom {
        mesh.x_desc(param.label);
    }
    mesh.draw()?;

    chart.draw_series(counts.iter().map(|&(start, c)| {
        Rectangle::new([(start, 0.0), (start + width, c as f64)], BLACK.mix(0.35).filled())
    }))?;

    for q in [summary.lower, summary.median, summary.upper] {
        chart.draw_series(DashedLineSeries::new(
            [(q, 0.0), (q, y_max)],
            m.dash,
            m.gap,
            BLACK.stroke_width(m.stroke),
        ))?;
    }
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(param.truth, 0.0), (param.truth, y_max)],
        TRUTH_COLOR.stroke_width(m.stroke),
    )))?;

    Ok(())
}

fn draw_joint(
    panel: &DrawingArea<BitMapBackend<'_>, Shift>,
    post: &Posterior,
    (ix, iy): (usize, usize),
    (x_range, y_range): ((f64, f64), (f64, f64)),
    m: Metrics,
    bottom: bool,
) -> PlotResult {
    let px = &post.params[ix];
    let py = &post.params[iy];
    let grid = histogram_2d(
        &post.samples[ix],
        &post.samples[iy],
        x_range,
        y_range,
        JOINT_BINS,
    );
    let peak = grid.iter().flatten().copied().max().unwrap_or(0).max(1) as f64;
    let wx = (x_range.1 - x_range.0) / JOINT_BINS as f64;
    let wy = (y_range.1 - y_range.0) / JOINT_BINS as f64;

    let mut chart = ChartBuilder::on(panel)
        .margin(m.margin / 2)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_labels(4)
        .y_labels(4)
        .label_style((FONT, m.tick))
        .axis_desc_style((FONT, m.label))
        .x_label_formatter(&style::tick_label)
        .y_label_formatter(&style::tick_label);
    if bottom {
        mesh.x_desc(px.label);
    }
    if ix == 0 {
        mesh.y_desc(py.label);
    }
    mesh.draw()?;

    let cells = grid.iter().enumerate().flat_map(|(row, counts)| {
        counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(move |(col, &c)| (row, col, c))
    });
    chart.draw_series(cells.map(|(row, col, c)| {
        let x0 = x_range.0 + col as f64 * wx;
        let y0 = y_range.0 + row as f64 * wy;
        let shade = 0.1 + 0.85 * c as f64 / peak;
        Rectangle::new([(x0, y0), (x0 + wx, y0 + wy)], BLACK.mix(shade).filled())
    }))?;

    let truth = TRUTH_COLOR.stroke_width(m.stroke);
    chart.draw_series([
        PathElement::new(vec![(px.truth, y_range.0), (px.truth, y_range.1)], truth),
        PathElement::new(vec![(x_range.0, py.truth), (x_range.1, py.truth)], truth),
    ])?;
    chart.draw_series(std::iter::once(Circle::new(
        (px.truth, py.truth),
        m.marker,
        TRUTH_COLOR.filled(),
    )))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_text_switches_to_scientific() {
        let k = Summary {
            lower: 1.54e-18,
            median: 1.60e-18,
            upper: 1.66e-18,
        };
        assert_eq!(format_summary(&k), "1.60e-18 +6.00e-20 -6.00e-20");

        let h = Summary {
            lower: 67.4,
            median: 68.2,
            upper: 69.0,
        };
        assert_eq!(format_summary(&h), "68.200 +0.800 -0.800");
    }

    #[test]
    fn sample_count_follows_config() {
        let mut cfg = FigureConfig::default();
        cfg.sampling.posterior_samples = 500;
        let post = compute(&cfg).unwrap();
        assert_eq!(post.dim(), 4);
        assert!(post.samples.iter().all(|c| c.len() == 500));
    }
}
