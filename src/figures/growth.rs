//! Figure 8 and the stand-alone growth figure: linear growth factor D(z).

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, FONT, LCDM_COLOR, STRETCH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::config::FigureConfig;
use crate::cosmo::grid::linspace;
use crate::cosmo::growth::{
    HubbleTable, ScaleFactorTable, growth_factor_redshift, growth_factor_scale,
};
use crate::cosmo::hubble::{
    lcdm_hubble_grid, stretch_hubble_quadratic_grid, stretch_hubble_recurrence,
};
use crate::cosmo::params::LcdmParams;
use crate::error::Result;

pub const REDSHIFT_Z_MAX: f64 = 10.0;
pub const REDSHIFT_SAMPLES: usize = 100;
pub const SCALE_Z_MAX: f64 = 2.0;
pub const SCALE_SAMPLES: usize = 1000;

#[derive(Clone, Debug)]
pub struct GrowthSeries {
    pub z: Vec<f64>,
    pub stretch: Vec<f64>,
    pub lcdm: Vec<f64>,
}

/// Redshift-form D(z) over [0, 10], normalised at z = 0.
pub fn compute_redshift(cfg: &FigureConfig) -> Result<GrowthSeries> {
    let z = linspace(0.0, REDSHIFT_Z_MAX, REDSHIFT_SAMPLES);
    let substeps = cfg.integration.substeps;

    let h_stretch = stretch_hubble_recurrence(&cfg.stretch, &z)?;
    let stretch_table = HubbleTable::new(&z, &h_stretch, cfg.stretch.h0, cfg.stretch.omega_m)?;
    let stretch = growth_factor_redshift(&stretch_table, &z, substeps)?;

    let h_lcdm = lcdm_hubble_grid(&cfg.lcdm, &z)?;
    let lcdm_table = HubbleTable::new(&z, &h_lcdm, cfg.lcdm.h0, cfg.lcdm.omega_m)?;
    let lcdm = growth_factor_redshift(&lcdm_table, &z, substeps)?;

    Ok(GrowthSeries { z, stretch, lcdm })
}

/// Scale-factor-form D over z ∈ [0, 2], normalised at the highest redshift.
///
/// The stretch model uses the closed-form E(z); the ΛCDM comparison shares the
/// stretch H0 and Ωm so only the dark-energy term differs.
pub fn compute_scale_factor(cfg: &FigureConfig) -> Result<GrowthSeries> {
    let z = linspace(0.0, SCALE_Z_MAX, SCALE_SAMPLES);
    let a: Vec<f64> = z.iter().map(|zi| 1.0 / (1.0 + zi)).collect();
    let substeps = cfg.integration.substeps;
    let (h0, omega_m) = (cfg.stretch.h0, cfg.stretch.omega_m);

    let h_stretch = stretch_hubble_quadratic_grid(&cfg.stretch, &z)?;
    let stretch_table = ScaleFactorTable::from_redshift(&z, &h_stretch, h0, omega_m)?;
    let stretch = growth_factor_scale(&stretch_table, &a, substeps)?;

    let matched = LcdmParams { h0, omega_m };
    let h_lcdm = lcdm_hubble_grid(&matched, &z)?;
    let lcdm_table = ScaleFactorTable::from_redshift(&z, &h_lcdm, h0, omega_m)?;
    let lcdm = growth_factor_scale(&lcdm_table, &a, substeps)?;

    Ok(GrowthSeries { z, stretch, lcdm })
}

pub(crate) fn render_redshift(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute_redshift(&ctx.config)?;
    draw(ctx, out_path, Figure::Dz, &s, "Growth Factor D(z)", "D(z)")
}

pub(crate) fn render_scale_factor(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute_scale_factor(&ctx.config)?;
    draw(
        ctx,
        out_path,
        Figure::Growth,
        &s,
        "Growth Factor vs Redshift",
        "Growth Factor D(z)",
    )
}

fn draw(
    ctx: &RenderContext,
    out_path: &Path,
    figure: Figure,
    s: &GrowthSeries,
    caption: &str,
    y_desc: &str,
) -> PlotResult {
    let m = ctx.metrics();

    maybe_write_csv(
        ctx,
        figure,
        &[
            Column::new("z", &s.z),
            Column::new("d_stretch", &s.stretch),
            Column::new("d_lcdm", &s.lcdm),
        ],
    )?;

    let z_max = s.z.last().copied().unwrap_or(1.0);
    let y_range = style::padded_range(s.stretch.iter().chain(&s.lcdm).copied(), 0.05);

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT, m.caption))
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(0.0..z_max, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Redshift z")
        .y_desc(y_desc)
        .axis_desc_style((FONT, m.label))
        .label_style((FONT, m.tick))
        .y_label_formatter(&style::tick_label)
        .draw()?;

    let stretch_style = STRETCH_COLOR.stroke_width(m.stroke);
    let lcdm_style = LCDM_COLOR.stroke_width(m.stroke);

    chart
        .draw_series(LineSeries::new(
            s.z.iter().copied().zip(s.stretch.iter().copied()),
            stretch_style,
        ))?
        .label("Stretch Model")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stretch_style));

    chart
        .draw_series(DashedLineSeries::new(
            s.z.iter().copied().zip(s.lcdm.iter().copied()),
            m.dash,
            m.gap,
            lcdm_style,
        ))?
        .label("ΛCDM")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], lcdm_style));

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
    fn redshift_form_starts_at_unity() {
        let s = compute_redshift(&FigureConfig::default()).unwrap();
        assert_eq!(s.z.len(), REDSHIFT_SAMPLES);
        assert_eq!(s.stretch[0], 1.0);
        assert_eq!(s.lcdm[0], 1.0);
        assert!(s.stretch.iter().chain(&s.lcdm).all(|v| v.is_finite()));
    }

    #[test]
    fn scale_form_ends_at_unity() {
        let s = compute_scale_factor(&FigureConfig::default()).unwrap();
        assert_eq!(s.z.len(), SCALE_SAMPLES);
        assert!((s.stretch[SCALE_SAMPLES - 1] - 1.0).abs() < 1e-12);
        assert!((s.lcdm[SCALE_SAMPLES - 1] - 1.0).abs() < 1e-12);
    }
}
