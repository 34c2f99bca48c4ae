//! Figures 5 and 7: effective equation of state w(z) and its derivative.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, CPL_COLOR, FONT, LCDM_COLOR, STRETCH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::config::FigureConfig;
use crate::cosmo::eos::{LCDM_W, stretch_w, stretch_w_prime};
use crate::cosmo::grid::linspace;
use crate::cosmo::hubble::stretch_hubble_recurrence;
use crate::error::Result;

pub const Z_MAX: f64 = 2.0;
pub const SAMPLES: usize = 100;

#[derive(Clone, Debug)]
pub struct EosSeries {
    pub z: Vec<f64>,
    pub w_stretch: Vec<f64>,
    pub w_prime_stretch: Vec<f64>,
    pub w_cpl: Vec<f64>,
    pub w_prime_cpl: Vec<f64>,
}

pub fn compute(cfg: &FigureConfig) -> Result<EosSeries> {
    let z = linspace(0.0, Z_MAX, SAMPLES);
    let dz = z[1] - z[0];
    let h = stretch_hubble_recurrence(&cfg.stretch, &z)?;
    let w_stretch = stretch_w(&h, dz)?;
    let w_prime_stretch = stretch_w_prime(&w_stretch, dz)?;
    let w_cpl = z.iter().map(|&zi| cfg.cpl.w(zi)).collect();
    let w_prime_cpl = z.iter().map(|&zi| cfg.cpl.w_prime(zi)).collect();
    Ok(EosSeries {
        z,
        w_stretch,
        w_prime_stretch,
        w_cpl,
        w_prime_cpl,
    })
}

pub(crate) fn render_w(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute(&ctx.config)?;
    let m = ctx.metrics();
    let cpl = ctx.config.cpl;
    let lcdm: Vec<f64> = vec![LCDM_W; s.z.len()];

    maybe_write_csv(
        ctx,
        Figure::Wz,
        &[
            Column::new("z", &s.z),
            Column::new("w_stretch", &s.w_stretch),
            Column::new("w_lcdm", &lcdm),
            Column::new("w_cpl", &s.w_cpl),
        ],
    )?;

    let y_range = style::padded_range(
        s.w_stretch.iter().chain(&s.w_cpl).chain(&lcdm).copied(),
        0.05,
    );

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Equation of State w_stretch(z)", (FONT, m.caption))
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(0.0..Z_MAX, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Redshift z")
        .y_desc("w_stretch(z)")
        .axis_desc_style((FONT, m.label))
        .label_style((FONT, m.tick))
        .y_label_formatter(&style::tick_label)
        .draw()?;

    let stretch_style = STRETCH_COLOR.stroke_width(m.stroke);
    let lcdm_style = LCDM_COLOR.stroke_width(m.stroke);
    let cpl_style = CPL_COLOR.stroke_width(m.stroke);

    chart
        .draw_series(LineSeries::new(
            s.z.iter().copied().zip(s.w_stretch.iter().copied()),
            stretch_style,
        ))?
        .label("Stretch Model")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stretch_style));

    chart
        .draw_series(DashedLineSeries::new(
            s.z.iter().copied().zip(lcdm.iter().copied()),
            m.dash,
            m.gap,
            lcdm_style,
        ))?
        .label("ΛCDM (w = -1)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], lcdm_style));

    // short dashes stand in for dash-dot
    chart
        .draw_series(DashedLineSeries::new(
            s.z.iter().copied().zip(s.w_cpl.iter().copied()),
            m.gap,
            m.gap,
            cpl_style,
        ))?
        .label(format!("CPL (w0 = {}, wa = {})", cpl.w0, cpl.wa))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], cpl_style));

    chart
        .configure_series_labels()
        .label_font((FONT, m.legend))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub(crate) fn render_w_prime(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute(&ctx.config)?;
    let m = ctx.metrics();

    maybe_write_csv(
        ctx,
        Figure::Wpz,
        &[
            Column::new("z", &s.z),
            Column::new("w_prime_stretch", &s.w_prime_stretch),
            Column::new("w_prime_cpl", &s.w_prime_cpl),
        ],
    )?;

    let y_range = style::padded_range(
        s.w_prime_stretch.iter().chain(&s.w_prime_cpl).copied(),
        0.05,
    );

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Derivative of Equation of State w'_stretch(z)",
            (FONT, m.caption),
        )
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(0.0..Z_MAX, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Redshift z")
        .y_desc("w'_stretch(z)")
        .axis_desc_style((FONT, m.label))
        .label_style((FONT, m.tick))
        .y_label_formatter(&style::tick_label)
        .draw()?;

    let stretch_style = STRETCH_COLOR.stroke_width(m.stroke);
    let cpl_style = CPL_COLOR.stroke_width(m.stroke);

    chart
        .draw_series(LineSeries::new(
            s.z.iter().copied().zip(s.w_prime_stretch.iter().copied()),
            stretch_style,
        ))?
        .label("Stretch Model")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stretch_style));

    chart
        .draw_series(DashedLineSeries::new(
            s.z.iter().copied().zip(s.w_prime_cpl.iter().copied()),
            m.gap,
            m.gap,
            cpl_style,
        ))?
        .label("CPL")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], cpl_style));

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
    fn series_share_the_grid() {
        let s = compute(&FigureConfig::default()).unwrap();
        assert_eq!(s.w_stretch.len(), SAMPLES);
        assert_eq!(s.w_prime_stretch.len(), SAMPLES);
        assert_eq!(s.w_cpl[0], -0.936);
        assert_eq!(s.w_prime_cpl[0], -0.314);
    }

    #[test]
    fn matter_dominated_branch_has_w_near_minus_three_halves() {
        // H ∝ (1+z)^1.5 away from the seed gives w = -1 - 0.5/(1+z)
        let s = compute(&FigureConfig::default()).unwrap();
        let i = 60;
        let expected = -1.0 - 0.5 / (1.0 + s.z[i]);
        assert!((s.w_stretch[i] - expected).abs() < 1e-3);
    }
}
