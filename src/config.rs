use crate::cosmo::params::{CplParams, LcdmParams, StretchParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,
    #[serde(default = "OutputConfig::default_width")]
    pub width: u32,
    #[serde(default = "OutputConfig::default_height")]
    pub height: u32,
    #[serde(default)]
    pub write_csv: bool,
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("figures")
    }
    // 8 x 6 in at 300 dpi
    fn default_width() -> u32 {
        2400
    }
    fn default_height() -> u32 {
        1800
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            width: Self::default_width(),
            height: Self::default_height(),
            write_csv: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplingConfig {
    /// Seed of the mock posterior draws.
    #[serde(default = "SamplingConfig::default_seed")]
    pub seed: u64,
    /// Seed of the DES Y3 scatter.
    #[serde(default = "SamplingConfig::default_noise_seed")]
    pub noise_seed: u64,
    #[serde(default = "SamplingConfig::default_posterior_samples")]
    pub posterior_samples: usize,
}

impl SamplingConfig {
    fn default_seed() -> u64 {
        42
    }
    fn default_noise_seed() -> u64 {
        0x5EED
    }
    fn default_posterior_samples() -> usize {
        10_000
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
            noise_seed: Self::default_noise_seed(),
            posterior_samples: Self::default_posterior_samples(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntegrationConfig {
    /// RK4 steps between neighbouring grid points.
    #[serde(default = "IntegrationConfig::default_substeps")]
    pub substeps: usize,
}

impl IntegrationConfig {
    fn default_substeps() -> usize {
        16
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            substeps: Self::default_substeps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FigureConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub stretch: StretchParams,
    #[serde(default)]
    pub lcdm: LcdmParams,
    #[serde(default)]
    pub cpl: CplParams,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub integration: IntegrationConfig,
}

impl FigureConfig {
    /// Comment out every key so the written file documents the defaults
    /// without pinning them.
    fn commented(text: &str) -> String {
        let mut out = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
                out.push_str(line);
            } else {
                out.push_str("# ");
                out.push_str(trimmed);
            }
            out.push('\n');
        }
        out
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {}: {err}. Using defaults.", path.display());
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {}: {err}. Using defaults.", path.display());
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path, Self::commented(&text)) {
                    warn!("Failed to write default config to {}: {err}", path.display());
                }
            }
            Err(err) => warn!("Failed to serialize default config: {err}"),
        }
        default_cfg
    }
}
