use std::fs;
use std::path::PathBuf;

use stretch_figures::config::FigureConfig;

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "stretch_figures_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn custom_config() -> FigureConfig {
    let mut cfg = FigureConfig::default();
    cfg.output.dir = PathBuf::from("paper/figs");
    cfg.output.width = 1200;
    cfg.output.height = 900;
    cfg.output.write_csv = true;
    cfg.stretch.h0 = 70.1;
    cfg.stretch.k_stretch = 2.25e-18;
    cfg.stretch.n = 0.97;
    cfg.lcdm.omega_m = 0.3;
    cfg.cpl.w0 = -0.9;
    cfg.cpl.wa = -0.25;
    cfg.sampling.seed = 7;
    cfg.sampling.posterior_samples = 2_000;
    cfg.integration.substeps = 4;
    cfg
}

#[test]
fn written_config_restores_every_field() {
    let path = unique_path("full.toml");
    let expected = custom_config();
    fs::write(&path, toml::to_string_pretty(&expected).expect("serialize")).expect("write");

    let restored = FigureConfig::load_or_default(&path);
    assert_eq!(restored, expected);

    let _ = fs::remove_file(&path);
}

#[test]
fn generated_defaults_file_round_trips_after_uncommenting() {
    let path = unique_path("generated.toml");
    let _ = fs::remove_file(&path);
    let _ = FigureConfig::load_or_default(&path);

    let text = fs::read_to_string(&path).expect("read generated config");
    let uncommented: String = text
        .lines()
        .map(|l| l.strip_prefix("# ").unwrap_or(l))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&path, uncommented).expect("rewrite");

    let restored = FigureConfig::load_or_default(&path);
    assert_eq!(restored, FigureConfig::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_sections_are_ignored() {
    let path = unique_path("extra.toml");
    fs::write(&path, "[plotting]\ndpi = 300\n\n[cpl]\nwa = 0.0\n").expect("write");

    let cfg = FigureConfig::load_or_default(&path);
    assert_eq!(cfg.cpl.wa, 0.0);
    assert_eq!(cfg.cpl.w0, -0.936);
    assert_eq!(cfg.stretch, FigureConfig::default().stretch);

    let _ = fs::remove_file(&path);
}
