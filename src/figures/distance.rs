//! Figure 2: percentage d_L residuals of the stretch model against Pantheon+.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, DATA_COLOR, FONT, STRETCH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::config::FigureConfig;
use crate::cosmo::distance::{luminosity_distance, percent_residuals, resample};
use crate::cosmo::grid::linspace;
use crate::cosmo::hubble::stretch_expansion;
use crate::data::{PANTHEON_REL_ERR, pantheon_plus_distances};
use crate::error::Result;

pub const Z_MIN: f64 = 0.01;
pub const Z_MAX: f64 = 2.0;
pub const SAMPLES: usize = 100;

/// Error bar drawn on every residual (percent).
pub const RESIDUAL_ERR_PCT: f64 = PANTHEON_REL_ERR * 100.0;

#[derive(Clone, Debug)]
pub struct ResidualSeries {
    pub z_model: Vec<f64>,
    pub d_l_model: Vec<f64>,
    pub z_data: Vec<f64>,
    pub d_l_data: Vec<f64>,
    pub residuals_pct: Vec<f64>,
}

pub fn compute(cfg: &FigureConfig) -> Result<ResidualSeries> {
    let z_model = linspace(Z_MIN, Z_MAX, SAMPLES);
    let e = stretch_expansion(&cfg.stretch, &z_model)?;
    let d_l_model = luminosity_distance(&z_model, &e, cfg.stretch.h0)?;

    let data = pantheon_plus_distances();
    let at_data = resample(&z_model, &d_l_model, &data.x);
    let residuals_pct = percent_residuals(&at_data, &data.y)?;

    Ok(ResidualSeries {
        z_model,
        d_l_model,
        z_data: data.x,
        d_l_data: data.y,
        residuals_pct,
    })
}

pub(crate) fn render(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute(&ctx.config)?;
    let m = ctx.metrics();

    maybe_write_csv(
        ctx,
        Figure::Residuals,
        &[
            Column::new("z", &s.z_data),
            Column::new("d_l_data", &s.d_l_data),
            Column::new("residual_pct", &s.residuals_pct),
        ],
    )?;

    let y_range = style::padded_range(
        s.residuals_pct
            .iter()
            .flat_map(|r| [r - RESIDUAL_ERR_PCT, r + RESIDUAL_ERR_PCT])
            .chain(std::iter::once(0.0)),
        0.08,
    );
    let x_range = style::padded_range(s.z_data.iter().copied(), 0.05);

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Percentage Residuals for Pantheon+ Data", (FONT, m.caption))
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Redshift z")
        .y_desc("Δd_L / d_L × 100 (%)")
        .axis_desc_style((FONT, m.label))
        .label_style((FONT, m.tick))
        .y_label_formatter(&style::tick_label)
        .draw()?;

    chart.draw_series(DashedLineSeries::new(
        [(x_range.start, 0.0), (x_range.end, 0.0)],
        m.dash,
        m.gap,
        DATA_COLOR.stroke_width(m.stroke),
    ))?;

    let points: Vec<(f64, f64)> = s
        .z_data
        .iter()
        .copied()
        .zip(s.residuals_pct.iter().copied())
        .collect();

    chart.draw_series(points.iter().map(|&(x, y)| {
        ErrorBar::new_vertical(
            x,
            y - RESIDUAL_ERR_PCT,
            y,
            y + RESIDUAL_ERR_PCT,
            STRETCH_COLOR.stroke_width(m.stroke),
            m.cap,
        )
    }))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, m.marker, STRETCH_COLOR.filled())),
        )?
        .label("Stretch Model")
        .legend(move |(x, y)| Circle::new((x + 10, y), m.marker, STRETCH_COLOR.filled()));

    chart
        .configure_series_labels()
        .label_font((FONT, m.legend))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_residual_per_supernova_bin() {
        let s = compute(&FigureConfig::default()).unwrap();
        assert_eq!(s.residuals_pct.len(), 20);
        assert_eq!(s.d_l_model.len(), SAMPLES);
        assert!(s.residuals_pct.iter().all(|r| r.is_finite()));
    }

    #[test]
    fn model_distance_grows_with_redshift() {
        let s = compute(&FigureConfig::default()).unwrap();
        assert!(s.d_l_model.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn zero_hubble_constant_is_reported() {
        let mut cfg = FigureConfig::default();
        cfg.stretch.h0 = 0.0;
        assert!(matches!(
            compute(&cfg),
            Err(crate::error::CosmoError::NonFinite { .. })
        ));
    }
}
