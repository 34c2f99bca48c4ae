use std::path::PathBuf;

use clap::Parser;

use crate::config::FigureConfig;
use crate::figures::Figure;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render the stretch-cosmology paper figures")]
pub struct Args {
    /// Figures to render (all when omitted)
    #[arg(value_enum, value_name = "FIGURE")]
    pub figures: Vec<Figure>,

    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Output directory (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Also write each figure's series as CSV (overrides config)
    #[arg(long, default_value_t = false)]
    pub csv: bool,

    /// List figure ids and file names, then exit
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Args {
    /// Requested figures in canonical order, deduplicated.
    pub fn selected(&self) -> Vec<Figure> {
        if self.figures.is_empty() {
            return Figure::all().to_vec();
        }
        Figure::all()
            .iter()
            .copied()
            .filter(|f| self.figures.contains(f))
            .collect()
    }

    pub fn apply_overrides(&self, cfg: &mut FigureConfig) {
        if let Some(dir) = &self.out_dir {
            cfg.output.dir = dir.clone();
        }
        if self.csv {
            cfg.output.write_csv = true;
        }
    }
}
