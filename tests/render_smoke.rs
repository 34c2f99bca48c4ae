use std::fs;
use std::path::PathBuf;

use stretch_figures::config::FigureConfig;
use stretch_figures::figures::{Figure, RenderContext, render, render_all};

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "stretch_figures_render_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn small_context(dir: &PathBuf, write_csv: bool) -> RenderContext {
    let mut cfg = FigureConfig::default();
    cfg.output.dir = dir.clone();
    cfg.output.width = 800;
    cfg.output.height = 600;
    cfg.output.write_csv = write_csv;
    cfg.sampling.posterior_samples = 2_000;
    RenderContext::new(cfg)
}

fn expected_header(figure: Figure) -> &'static str {
    match figure {
        Figure::Hz => "z,h_stretch,h_lcdm",
        Figure::Residuals => "z,d_l_data,residual_pct",
        Figure::Corner => "n,k_stretch,omega_m,h0",
        Figure::Galaxies => "z,stretch_no_env,stretch_with_env,jwst,jwst_err",
        Figure::Wz => "z,w_stretch,w_lcdm,w_cpl",
        Figure::Shear => "ell,c_ell_stretch,c_ell_lcdm,c_ell_des,c_ell_des_err",
        Figure::Wpz => "z,w_prime_stretch,w_prime_cpl",
        Figure::Dz | Figure::Growth => "z,d_stretch,d_lcdm",
    }
}

#[test]
fn every_figure_writes_a_png() {
    let dir = unique_path("png");
    let ctx = small_context(&dir, false);

    let paths = render_all(Figure::all(), &ctx).expect("render all figures");
    assert_eq!(paths.len(), Figure::all().len());
    for (path, figure) in paths.iter().zip(Figure::all()) {
        assert_eq!(path, &dir.join(figure.file_name()));
        let len = fs::metadata(path).expect("png exists").len();
        assert!(len > 0, "{} is empty", path.display());
        assert!(!dir.join(figure.csv_name()).exists());
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn csv_sidecars_match_plotted_columns() {
    let dir = unique_path("csv");
    let ctx = small_context(&dir, true);

    render_all(Figure::all(), &ctx).expect("render all figures");
    for &figure in Figure::all() {
        let path = dir.join(figure.csv_name());
        let text = fs::read_to_string(&path).expect("csv sidecar exists");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(expected_header(figure)), "{}", figure.id());
        assert!(lines.next().is_some(), "{} has no rows", figure.id());
    }

    let corner = fs::read_to_string(dir.join(Figure::Corner.csv_name())).unwrap();
    assert_eq!(corner.lines().count(), 1 + 2_000);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_parameters_fail_the_render() {
    let dir = unique_path("invalid");
    let mut ctx = small_context(&dir, false);
    ctx.config.lcdm.omega_m = -0.5;

    assert!(render(Figure::Hz, &ctx).is_err());
    assert!(render(Figure::Galaxies, &ctx).is_ok());

    let _ = fs::remove_dir_all(&dir);
}
