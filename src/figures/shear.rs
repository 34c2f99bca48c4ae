//! Figure 6: convergence power spectrum on log–log axes with DES Y3 points.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, DATA_COLOR, FONT, LCDM_COLOR, STRETCH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::config::FigureConfig;
use crate::cosmo::grid::logspace;
use crate::cosmo::shear::{STRETCH_SHEAR_BOOST, shear_spectrum};
use crate::data::{Observations, des_y3_shear};
use crate::error::Result;

pub const ELL_MIN_EXP: f64 = 1.0;
pub const ELL_MAX_EXP: f64 = 3.0;
pub const SAMPLES: usize = 50;

#[derive(Clone, Debug)]
pub struct ShearSeries {
    pub ell: Vec<f64>,
    pub stretch: Vec<f64>,
    pub lcdm: Vec<f64>,
    pub des: Observations,
}

pub fn compute(cfg: &FigureConfig) -> Result<ShearSeries> {
    let ell = logspace(ELL_MIN_EXP, ELL_MAX_EXP, SAMPLES);
    let stretch = shear_spectrum(&ell, STRETCH_SHEAR_BOOST);
    let lcdm = shear_spectrum(&ell, 1.0);
    let des = des_y3_shear(&ell, &lcdm, cfg.sampling.noise_seed)?;
    Ok(ShearSeries {
        ell,
        stretch,
        lcdm,
        des,
    })
}

pub(crate) fn render(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute(&ctx.config)?;
    let m = ctx.metrics();

    maybe_write_csv(
        ctx,
        Figure::Shear,
        &[
            Column::new("ell", &s.ell),
            Column::new("c_ell_stretch", &s.stretch),
            Column::new("c_ell_lcdm", &s.lcdm),
            Column::new("c_ell_des", &s.des.y),
            Column::new("c_ell_des_err", &s.des.err),
        ],
    )?;

    let x_range = style::log_range(s.ell.iter().copied(), 1.1);
    let y_range = style::log_range(
        s.stretch
            .iter()
            .chain(&s.lcdm)
            .copied()
            .chain(s.des.points().flat_map(|(_, y, e)| [y - e, y + e])),
        1.2,
    );

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cosmic Shear Power Spectrum C_ℓ^κκ", (FONT, m.caption))
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Multipole ℓ")
        .y_desc("C_ℓ^κκ")
        .axis_desc_style((FONT, m.label))
        .label_style((FONT, m.tick))
        .x_label_formatter(&style::tick_label)
        .y_label_formatter(&style::tick_label)
        .light_line_style(BLACK.mix(0.08))
        .bold_line_style(BLACK.mix(0.2))
        .draw()?;

    let stretch_style = STRETCH_COLOR.stroke_width(m.stroke);
    let lcdm_style = LCDM_COLOR.stroke_width(m.stroke);

    chart
        .draw_series(LineSeries::new(
            s.ell.iter().copied().zip(s.stretch.iter().copied()),
            stretch_style,
        ))?
        .label("Stretch Model")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stretch_style));

    chart
        .draw_series(DashedLineSeries::new(
            s.ell.iter().copied().zip(s.lcdm.iter().copied()),
            m.dash,
            m.gap,
            lcdm_style,
        ))?
        .label("ΛCDM")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], lcdm_style));

    chart.draw_series(s.des.points().map(|(x, y, e)| {
        ErrorBar::new_vertical(x, y - e, y, y + e, DATA_COLOR.stroke_width(m.stroke), m.cap)
    }))?;
    chart
        .draw_series(
            s.des
                .points()
                .map(|(x, y, _)| Circle::new((x, y), m.marker, DATA_COLOR.filled())),
        )?
        .label(s.des.label)
        .legend(move |(x, y)| Circle::new((x + 10, y), m.marker, DATA_COLOR.filled()));

    chart
        .configure_series_labels()
        .label_font((FONT, m.legend))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
