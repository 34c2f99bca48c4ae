//! Paper figures: one module per quantity, each computing its series and
//! drawing them with plotters.

pub mod corner;
pub mod csv;
pub mod distance;
pub mod eos;
pub mod galaxies;
pub mod growth;
pub mod hubble;
pub mod shear;
pub mod style;

use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::info;

use crate::config::FigureConfig;

pub type PlotResult<T = ()> = Result<T, Box<dyn Error>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Figure {
    /// H(z) against DESI DR2
    Hz,
    /// Luminosity-distance residuals against Pantheon+
    Residuals,
    /// Parameter posterior corner plot
    Corner,
    /// Galaxy counts at z = 8-10 against JWST
    Galaxies,
    /// Equation of state w(z)
    Wz,
    /// Cosmic shear power spectrum against DES Y3
    Shear,
    /// Derivative of the equation of state w'(z)
    Wpz,
    /// Growth factor D(z) to z = 10
    Dz,
    /// Growth factor from the scale-factor equation
    Growth,
}

impl Figure {
    pub fn all() -> &'static [Figure] {
        &[
            Figure::Hz,
            Figure::Residuals,
            Figure::Corner,
            Figure::Galaxies,
            Figure::Wz,
            Figure::Shear,
            Figure::Wpz,
            Figure::Dz,
            Figure::Growth,
        ]
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Figure::Hz => "figure1_Hz.png",
            Figure::Residuals => "figure2_residuals.png",
            Figure::Corner => "figure3_corner.png",
            Figure::Galaxies => "figure4_galaxies.png",
            Figure::Wz => "figure5_wz.png",
            Figure::Shear => "figure6_shear.png",
            Figure::Wpz => "figure7_wpz.png",
            Figure::Dz => "figure8_Dz.png",
            Figure::Growth => "growth_factor_Dz.png",
        }
    }

    pub fn csv_name(self) -> String {
        let png = self.file_name();
        format!("{}.csv", png.trim_end_matches(".png"))
    }

    pub fn id(self) -> &'static str {
        match self {
            Figure::Hz => "hz",
            Figure::Residuals => "residuals",
            Figure::Corner => "corner",
            Figure::Galaxies => "galaxies",
            Figure::Wz => "wz",
            Figure::Shear => "shear",
            Figure::Wpz => "wpz",
            Figure::Dz => "dz",
            Figure::Growth => "growth",
        }
    }
}

/// Everything a renderer needs: parameters and where to write.
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub config: FigureConfig,
    pub out_dir: PathBuf,
}

impl RenderContext {
    pub fn new(config: FigureConfig) -> Self {
        let out_dir = config.output.dir.clone();
        Self { config, out_dir }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.config.output.width, self.config.output.height)
    }

    #[inline]
    pub fn metrics(&self) -> style::Metrics {
        style::Metrics::for_canvas(self.config.output.width)
    }

    pub fn path_for(&self, figure: Figure) -> PathBuf {
        self.out_dir.join(figure.file_name())
    }

    /// CSV sidecar path when enabled.
    pub fn csv_path_for(&self, figure: Figure) -> Option<PathBuf> {
        self.config
            .output
            .write_csv
            .then(|| self.out_dir.join(figure.csv_name()))
    }
}

pub fn render(figure: Figure, ctx: &RenderContext) -> PlotResult<PathBuf> {
    create_dir_all(&ctx.out_dir)?;
    let path = ctx.path_for(figure);
    match figure {
        Figure::Hz => hubble::render(ctx, &path)?,
        Figure::Residuals => distance::render(ctx, &path)?,
        Figure::Corner => corner::render(ctx, &path)?,
        Figure::Galaxies => galaxies::render(ctx, &path)?,
        Figure::Wz => eos::render_w(ctx, &path)?,
        Figure::Shear => shear::render(ctx, &path)?,
        Figure::Wpz => eos::render_w_prime(ctx, &path)?,
        Figure::Dz => growth::render_redshift(ctx, &path)?,
        Figure::Growth => growth::render_scale_factor(ctx, &path)?,
    }
    info!(figure = figure.id(), path = %path.display(), "figure written");
    Ok(path)
}

pub fn render_all(figures: &[Figure], ctx: &RenderContext) -> PlotResult<Vec<PathBuf>> {
    figures.iter().map(|&f| render(f, ctx)).collect()
}

/// Write the CSV sidecar for `figure` if enabled; returns the path written.
pub(crate) fn maybe_write_csv(
    ctx: &RenderContext,
    figure: Figure,
    columns: &[csv::Column<'_>],
) -> PlotResult<Option<PathBuf>> {
    let Some(path) = ctx.csv_path_for(figure) else {
        return Ok(None);
    };
    csv::write_columns(&path, columns)?;
    Ok(Some(path))
}
