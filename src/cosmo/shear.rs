//! cosmo/shear.rs — convergence power spectrum C_ℓ^κκ as a pivoted power law.

/// Amplitude at the pivot multipole for σ8 = 0.81.
pub const SHEAR_AMPLITUDE: f64 = 1e-9;
pub const SHEAR_PIVOT_ELL: f64 = 100.0;
pub const SHEAR_SLOPE: f64 = -0.8;

/// Stretch-model amplitude relative to ΛCDM (σ8 = 0.82 vs 0.81).
pub const STRETCH_SHEAR_BOOST: f64 = 1.02;

/// `C_ℓ = scale * A * (ℓ / 100)^-0.8`.
#[inline]
pub fn shear_power(ell: f64, scale: f64) -> f64 {
    scale * SHEAR_AMPLITUDE * (ell / SHEAR_PIVOT_ELL).powf(SHEAR_SLOPE)
}

pub fn shear_spectrum(ells: &[f64], scale: f64) -> Vec<f64> {
    ells.iter().map(|&l| shear_power(l, scale)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_returns_amplitude() {
        assert!((shear_power(100.0, 1.0) - 1e-9).abs() < 1e-24);
        assert!((shear_power(100.0, STRETCH_SHEAR_BOOST) - 1.02e-9).abs() < 1e-24);
    }

    #[test]
    fn spectrum_falls_with_multipole() {
        let c = shear_spectrum(&[10.0, 100.0, 1000.0], 1.0);
        assert!(c[0] > c[1] && c[1] > c[2]);
        // one decade down the slope
        assert!((c[2] / c[1] - 10f64.powf(-0.8)).abs() < 1e-12);
    }
}
