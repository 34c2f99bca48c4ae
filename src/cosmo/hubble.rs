//! cosmo/hubble.rs — expansion rate H(z) for the stretch and ΛCDM models.
//!
//! The stretch model is given in two forms used by the paper figures:
//! a grid recurrence where each H feeds the stretch term of the next sample,
//! and a closed-form quadratic in E = H/H0 with the stretch constant in s^-1.

use std::f64::consts::PI;

use tracing::debug;

use crate::cosmo::grid::ensure_finite;
use crate::cosmo::params::{LcdmParams, StretchParams};
use crate::error::{CosmoError, Result};

/// ΛCDM Hubble rate (km/s/Mpc).
#[inline]
pub fn lcdm_hubble(params: &LcdmParams, z: f64) -> f64 {
    params.h0 * lcdm_expansion(params, z)
}

/// ΛCDM dimensionless expansion rate E(z).
#[inline]
pub fn lcdm_expansion(params: &LcdmParams, z: f64) -> f64 {
    (params.omega_m * (1.0 + z).powi(3) + params.omega_lambda()).sqrt()
}

/// ΛCDM H over a grid; a negative radicand is an error rather than NaN.
pub fn lcdm_hubble_grid(params: &LcdmParams, zs: &[f64]) -> Result<Vec<f64>> {
    ensure_finite(
        "ΛCDM H(z)",
        zs.iter().map(|&z| lcdm_hubble(params, z)).collect(),
    )
}

/// Stretch-model H over a redshift grid via the lagged recurrence
/// `H_i = sqrt(Ωm H0² (1+z_i)³ + (k/3) H_{i-1}^n / (8π/3))`, seeded with `H_0 = H0`.
///
/// Values depend on the grid spacing because the stretch term lags one sample.
pub fn stretch_hubble_recurrence(params: &StretchParams, zs: &[f64]) -> Result<Vec<f64>> {
    if zs.is_empty() {
        return Ok(Vec::new());
    }
    let stretch_scale = (params.k_stretch / 3.0) / (8.0 * PI / 3.0);
    let mut h = Vec::with_capacity(zs.len());
    h.push(params.h0);
    for (i, &z) in zs.iter().enumerate().skip(1) {
        let rho_m = params.omega_m * params.h0 * params.h0 * (1.0 + z).powi(3);
        let next = (rho_m + stretch_scale * h[i - 1].powf(params.n)).sqrt();
        if !next.is_finite() {
            return Err(CosmoError::NonFinite {
                what: "stretch H(z)",
                index: i,
            });
        }
        h.push(next);
    }
    debug!(
        samples = h.len(),
        h_first = h[0],
        h_last = h[h.len() - 1],
        "stretch recurrence"
    );
    Ok(h)
}

/// E(z) = H/H0 from the recurrence.
pub fn stretch_expansion(params: &StretchParams, zs: &[f64]) -> Result<Vec<f64>> {
    let e = stretch_hubble_recurrence(params, zs)?
        .into_iter()
        .map(|h| h / params.h0)
        .collect();
    ensure_finite("stretch E(z)", e)
}

/// Positive root of `E² - (k / 3H0) E - Ωm (1+z)³ = 0`, with H0 in s^-1.
pub fn stretch_expansion_quadratic(params: &StretchParams, z: f64) -> Result<f64> {
    let b = -params.k_stretch / (3.0 * params.h0_per_sec());
    let c = -params.omega_m * (1.0 + z).powi(3);
    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return Err(CosmoError::NegativeDiscriminant { z, discriminant });
    }
    Ok((-b + discriminant.sqrt()) / 2.0)
}

pub fn stretch_hubble_quadratic_grid(params: &StretchParams, zs: &[f64]) -> Result<Vec<f64>> {
    zs.iter()
        .map(|&z| stretch_expansion_quadratic(params, z).map(|e| params.h0 * e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmo::grid::linspace;

    #[test]
    fn lcdm_today_is_h0() {
        let p = LcdmParams::default();
        assert!((lcdm_hubble(&p, 0.0) - 67.4).abs() < 1e-12);
        assert!(lcdm_hubble(&p, 1.0) > lcdm_hubble(&p, 0.5));
    }

    #[test]
    fn recurrence_seeds_with_h0_then_tracks_matter() {
        let p = StretchParams::default();
        let z = linspace(0.0, 2.5, 100);
        let h = stretch_hubble_recurrence(&p, &z).unwrap();
        assert_eq!(h.len(), 100);
        assert_eq!(h[0], 68.2);
        // stretch term is ~1e-19 of the matter term at these scales
        let matter = (p.omega_m * p.h0 * p.h0 * (1.0 + z[50]).powi(3)).sqrt();
        assert!((h[50] - matter).abs() / matter < 1e-12);
        assert!(h[1..].windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn recurrence_handles_empty_grid() {
        let p = StretchParams::default();
        assert!(stretch_hubble_recurrence(&p, &[]).unwrap().is_empty());
    }

    #[test]
    fn quadratic_root_satisfies_equation() {
        let p = StretchParams::default();
        for &z in &[0.0, 0.7, 2.0] {
            let e = stretch_expansion_quadratic(&p, z).unwrap();
            let b = -p.k_stretch / (3.0 * p.h0_per_sec());
            let c = -p.omega_m * (1.0 + z).powi(3);
            assert!((e * e + b * e + c).abs() < 1e-12);
            assert!(e > 0.0);
        }
    }

    #[test]
    fn lcdm_grid_rejects_negative_radicand() {
        let p = LcdmParams {
            omega_m: -0.5,
            ..LcdmParams::default()
        };
        // 1.5 - 0.5 (1+z)^3 < 0 beyond z ≈ 0.44
        let z = linspace(0.0, 2.5, 100);
        assert!(matches!(
            lcdm_hubble_grid(&p, &z),
            Err(CosmoError::NonFinite { what: "ΛCDM H(z)", index }) if index > 0
        ));
        assert_eq!(lcdm_hubble_grid(&LcdmParams::default(), &z).unwrap().len(), 100);
    }

    #[test]
    fn stretch_expansion_rejects_zero_h0() {
        let p = StretchParams {
            h0: 0.0,
            ..StretchParams::default()
        };
        let z = linspace(0.0, 2.0, 10);
        assert!(matches!(
            stretch_expansion(&p, &z),
            Err(CosmoError::NonFinite { what: "stretch E(z)", index: 0 })
        ));
    }

    #[test]
    fn quadratic_rejects_negative_discriminant() {
        let p = StretchParams {
            omega_m: -5.0,
            k_stretch: 0.0,
            ..StretchParams::default()
        };
        assert!(matches!(
            stretch_expansion_quadratic(&p, 1.0),
            Err(CosmoError::NegativeDiscriminant { .. })
        ));
    }
}
