//! cosmo/params.rs — model parameter sets with the paper's best-fit values.

use serde::{Deserialize, Serialize};

/// 1 km/s/Mpc expressed in s^-1.
pub const KM_S_MPC_TO_PER_SEC: f64 = 3.24078e-20;

/// Stretch-model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchParams {
    /// Hubble constant (km/s/Mpc).
    #[serde(default = "StretchParams::default_h0")]
    pub h0: f64,
    #[serde(default = "StretchParams::default_omega_m")]
    pub omega_m: f64,
    /// Stretch constant (s^-1).
    #[serde(default = "StretchParams::default_k_stretch")]
    pub k_stretch: f64,
    /// Stretch exponent.
    #[serde(default = "StretchParams::default_n")]
    pub n: f64,
}

impl StretchParams {
    fn default_h0() -> f64 {
        68.2
    }
    fn default_omega_m() -> f64 {
        0.310
    }
    fn default_k_stretch() -> f64 {
        1.60e-18
    }
    fn default_n() -> f64 {
        1.01
    }

    /// H0 converted to s^-1.
    #[inline]
    pub fn h0_per_sec(&self) -> f64 {
        self.h0 * KM_S_MPC_TO_PER_SEC
    }
}

impl Default for StretchParams {
    fn default() -> Self {
        Self {
            h0: Self::default_h0(),
            omega_m: Self::default_omega_m(),
            k_stretch: Self::default_k_stretch(),
            n: Self::default_n(),
        }
    }
}

/// Flat ΛCDM reference parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LcdmParams {
    #[serde(default = "LcdmParams::default_h0")]
    pub h0: f64,
    #[serde(default = "LcdmParams::default_omega_m")]
    pub omega_m: f64,
}

impl LcdmParams {
    fn default_h0() -> f64 {
        67.4
    }
    fn default_omega_m() -> f64 {
        0.315
    }

    #[inline]
    pub fn omega_lambda(&self) -> f64 {
        1.0 - self.omega_m
    }
}

impl Default for LcdmParams {
    fn default() -> Self {
        Self {
            h0: Self::default_h0(),
            omega_m: Self::default_omega_m(),
        }
    }
}

/// Chevallier–Polarski–Linder dark-energy parameterisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CplParams {
    #[serde(default = "CplParams::default_w0")]
    pub w0: f64,
    #[serde(default = "CplParams::default_wa")]
    pub wa: f64,
}

impl CplParams {
    fn default_w0() -> f64 {
        -0.936
    }
    fn default_wa() -> f64 {
        -0.314
    }
}

impl Default for CplParams {
    fn default() -> Self {
        Self {
            w0: Self::default_w0(),
            wa: Self::default_wa(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h0_conversion_matches_reference_constant() {
        let p = StretchParams::default();
        let expected = 68.2 * 3.24078e-20;
        assert!((p.h0_per_sec() - expected).abs() < 1e-30);
    }

    #[test]
    fn lcdm_is_flat() {
        let p = LcdmParams::default();
        assert!((p.omega_m + p.omega_lambda() - 1.0).abs() < 1e-12);
    }
}
