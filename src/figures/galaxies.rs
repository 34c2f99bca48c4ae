//! Figure 4: high-redshift galaxy counts with and without environmental effects.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::csv::Column;
use super::style::{self, DATA_COLOR, FONT, STRETCH_COLOR};
use super::{Figure, PlotResult, RenderContext, maybe_write_csv};
use crate::data::jwst_galaxy_counts;

pub(crate) fn render(ctx: &RenderContext, out_path: &Path) -> PlotResult {
    let counts = jwst_galaxy_counts();
    let m = ctx.metrics();

    maybe_write_csv(
        ctx,
        Figure::Galaxies,
        &[
            Column::new("z", &counts.z),
            Column::new("stretch_no_env", &counts.without_environment),
            Column::new("stretch_with_env", &counts.with_environment),
            Column::new("jwst", &counts.jwst.y),
            Column::new("jwst_err", &counts.jwst.err),
        ],
    )?;

    let y_range = style::padded_range(
        counts
            .without_environment
            .iter()
            .chain(&counts.with_environment)
            .copied()
            .chain(counts.jwst.points().flat_map(|(_, y, e)| [y - e, y + e])),
        0.08,
    );
    let x_range = style::padded_range(counts.z.iter().copied(), 0.1);

    let root = BitMapBackend::new(out_path, ctx.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Galaxy Counts at z = 8-10", (FONT, m.caption))
        .margin(m.margin)
        .x_label_area_size(m.x_area)
        .y_label_area_size(m.y_area)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Redshift z")
        .y_desc("Galaxy Counts (arcmin^-2)")
        .axis_desc_style((FONT, m.label))
        .label_style((FONT, m.tick))
        .x_label_formatter(&style::tick_label)
        .y_label_formatter(&style::tick_label)
        .draw()?;

    let line = STRETCH_COLOR.stroke_width(m.stroke);

    chart
        .draw_series(DashedLineSeries::new(
            counts
                .z
                .iter()
                .copied()
                .zip(counts.without_environment.iter().copied()),
            m.dash,
            m.gap,
            line,
        ))?
        .label("Stretch Model (No Env.)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));

    chart
        .draw_series(LineSeries::new(
            counts
                .z
                .iter()
                .copied()
                .zip(counts.with_environment.iter().copied()),
            line,
        ))?
        .label("Stretch Model (With Env.)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));

    chart.draw_series(counts.jwst.points().map(|(x, y, e)| {
        ErrorBar::new_vertical(x, y - e, y, y + e, DATA_COLOR.stroke_width(m.stroke), m.cap)
    }))?;
    chart
        .draw_series(
            counts
                .jwst
                .points()
                .map(|(x, y, _)| Circle::new((x, y), m.marker, DATA_COLOR.filled())),
        )?
        .label(counts.jwst.label)
        .legend(move |(x, y)| Circle::new((x + 10, y), m.marker, DATA_COLOR.filled()));

    chart
        .configure_series_labels()
        .label_font((FONT, m.legend))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}
