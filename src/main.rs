use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stretch_figures::cli::Args;
use stretch_figures::config::FigureConfig;
use stretch_figures::figures::{Figure, RenderContext, render_all};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stretch_figures=info".into()),
        )
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    if args.list {
        for &f in Figure::all() {
            println!("{:<10} {}", f.id(), f.file_name());
        }
        return ExitCode::SUCCESS;
    }

    let mut cfg = FigureConfig::load_or_default(&args.config);
    args.apply_overrides(&mut cfg);

    let figures = args.selected();
    info!(count = figures.len(), out_dir = %cfg.output.dir.display(), "rendering figures");
    let ctx = RenderContext::new(cfg);

    match render_all(&figures, &ctx) {
        Ok(paths) => {
            println!("Saved {} figures to {}", paths.len(), ctx.out_dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("figure rendering failed: {err}");
            ExitCode::FAILURE
        }
    }
}
