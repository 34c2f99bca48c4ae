//! cosmo/distance.rs — luminosity distance and percentage residuals.

use crate::cosmo::grid::{cumulative_sum, ensure_finite, interp_clamped};
use crate::error::{CosmoError, Result};

/// `d_L(z) = (1+z) * Σ(1/E) dz / H0` over a uniform grid.
///
/// The integral is a left Riemann sum with `dz` taken from the first grid step.
pub fn luminosity_distance(zs: &[f64], e_values: &[f64], h0: f64) -> Result<Vec<f64>> {
    if zs.len() != e_values.len() {
        return Err(CosmoError::LengthMismatch {
            what: "luminosity_distance",
            left: zs.len(),
            right: e_values.len(),
        });
    }
    if zs.len() < 2 {
        return Err(CosmoError::TooFewSamples {
            what: "luminosity_distance",
            min: 2,
            got: zs.len(),
        });
    }
    let dz = zs[1] - zs[0];
    let inv_e: Vec<f64> = e_values.iter().map(|e| 1.0 / e).collect();
    let integral = cumulative_sum(&inv_e, dz);
    ensure_finite(
        "luminosity distance",
        zs.iter()
            .zip(integral)
            .map(|(&z, i)| (1.0 + z) * i / h0)
            .collect(),
    )
}

/// Resample a model curve at the data redshifts (clamped at the grid ends).
pub fn resample(z_model: &[f64], model: &[f64], z_data: &[f64]) -> Vec<f64> {
    z_data
        .iter()
        .map(|&z| interp_clamped(z, z_model, model))
        .collect()
}

/// `(model - data) / data * 100`.
pub fn percent_residuals(model: &[f64], data: &[f64]) -> Result<Vec<f64>> {
    if model.len() != data.len() {
        return Err(CosmoError::LengthMismatch {
            what: "percent_residuals",
            left: model.len(),
            right: data.len(),
        });
    }
    model
        .iter()
        .zip(data)
        .enumerate()
        .map(|(index, (&m, &d))| {
            if d == 0.0 {
                Err(CosmoError::ZeroReference { index })
            } else {
                Ok((m - d) / d * 100.0)
            }
        })
        .collect()
}
