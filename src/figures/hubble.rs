//! Figure 1: H(z) of both models against the DESI DR2 points.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, DATA_COLOR, FONT, LCDM_COLOR, STRETCH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::config::FigureConfig;
use crate::cosmo::grid::linspace;
use crate::cosmo::hubble::{lcdm_hubble_grid, stretch_hubble_recurrence};
use crate::data::{Observations, desi_dr2_hubble};
use crate::error::Result;

pub const Z_MAX: f64 = 2.5;
pub const SAMPLES: usize = 100;

#[derive(Clone, Debug)]
pub struct HubbleSeries {
    pub z: Vec<f64>,
    pub stretch: Vec<f64>,
    pub lcdm: Vec<f64>,
    pub desi: Observations,
}

pub fn compute(cfg: &FigureConfig) -> Result<HubbleSeries> {
    let z = linspace(0.0, Z_MAX, SAMPLES);
    let stretch = stretch_hubble_recurrence(&cfg.stretch, &z)?;
    let lcdm = lcdm_hubble_grid(&cfg.lcdm, &z)?;
    Ok(HubbleSeries {
        z,
        stretch,
        lcdm,
        desi: desi_dr2_hubble(),
    })
}

pub(crate) fn render(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let s = compute(&ctx.config)?;
    let m = ctx.metrics();

    maybe_write_csv(
        ctx,
        Figure::Hz,
        &[
            Column::new("z", &s.z),
            Column::new("h_stretch", &s.stretch),
            Column::new("h_lcdm", &s.lcdm),
        ],
    )?;

    let y_range = style::padded_range(
        s.stretch
            .iter()
            .chain(&s.lcdm)
            .copied()
            .chain(s.desi.points().flat_map(|(_, y, e)| [y - e, y + e])),
        0.05,
    );

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("H(z) vs. Redshift", (FONT, m.caption))
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(0.0..Z_MAX, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Redshift z")
        .y_desc("H(z) (km/s/Mpc)")
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

    chart.draw_series(s.desi.points().map(|(x, y, e)| {
        ErrorBar::new_vertical(x, y - e, y, y + e, DATA_COLOR.stroke_width(m.stroke), m.cap)
    }))?;
    chart
        .draw_series(
            s.desi
                .points()
                .map(|(x, y, _)| Circle::new((x, y), m.marker, DATA_COLOR.filled())),
        )?
        .label(s.desi.label)
        .legend(move |(x, y)| Circle::new((x + 10, y), m.marker, DATA_COLOR.filled()));

    chart
        .configure_series_labels()
        .label_font((FONT, m.legend))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}
