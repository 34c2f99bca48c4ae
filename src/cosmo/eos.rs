//! cosmo/eos.rs — effective dark-energy equation of state.

use crate::cosmo::grid::gradient;
use crate::cosmo::params::CplParams;
use crate::error::{CosmoError, Result};

/// `w(z) = -1 - (1/3) (dH/dz) / H` on a uniform grid of step `dz`.
pub fn stretch_w(h: &[f64], dz: f64) -> Result<Vec<f64>> {
    let dh = gradient(h, dz)?;
    h.iter()
        .zip(dh)
        .enumerate()
        .map(|(index, (&hv, d))| {
            let w = -1.0 - d / (3.0 * hv);
            if w.is_finite() {
                Ok(w)
            } else {
                Err(CosmoError::NonFinite {
                    what: "w(z)",
                    index,
                })
            }
        })
        .collect()
}

/// `dw/dz` on a uniform grid.
pub fn stretch_w_prime(w: &[f64], dz: f64) -> Result<Vec<f64>> {
    gradient(w, dz)
}

/// ΛCDM cosmological constant.
pub const LCDM_W: f64 = -1.0;

impl CplParams {
    #[inline]
    pub fn w(&self, z: f64) -> f64 {
        self.w0 + self.wa * z / (1.0 + z)
    }

    #[inline]
    pub fn w_prime(&self, z: f64) -> f64 {
        self.wa / (1.0 + z).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_h_gives_cosmological_constant() {
        let w = stretch_w(&[70.0; 5], 0.1).unwrap();
        assert!(w.iter().all(|&v| (v - LCDM_W).abs() < 1e-12));
    }

    #[test]
    fn growing_h_pushes_w_below_minus_one() {
        let h: Vec<f64> = (0..10).map(|i| 60.0 + i as f64).collect();
        let w = stretch_w(&h, 0.1).unwrap();
        assert!(w.iter().all(|&v| v < -1.0));
    }

    #[test]
    fn zero_h_is_reported() {
        assert!(matches!(
            stretch_w(&[0.0, 1.0, 2.0], 0.1),
            Err(CosmoError::NonFinite { index: 0, .. })
        ));
    }

    #[test]
    fn cpl_limits() {
        let cpl = CplParams::default();
        assert_eq!(cpl.w(0.0), -0.936);
        assert_eq!(cpl.w_prime(0.0), -0.314);
        // w -> w0 + wa as z -> inf
        assert!((cpl.w(1e9) - (-0.936 - 0.314)).abs() < 1e-6);
    }
}
