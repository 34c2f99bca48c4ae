//! Mock observational datasets overlaid on the model curves.
//!
//! These are placeholders with the published survey layout, not real
//! measurements.

use rand::{SeedableRng, rngs::StdRng};

use crate::cosmo::grid::linspace;
use crate::cosmo::posterior::sample_gaussian;
use crate::error::Result;

/// Points with symmetric error bars.
#[derive(Clone, Debug, PartialEq)]
pub struct Observations {
    pub label: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub err: Vec<f64>,
}

impl Observations {
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.err)
            .map(|((&x, &y), &e)| (x, y, e))
    }
}

/// DESI DR2 H(z) (km/s/Mpc).
pub fn desi_dr2_hubble() -> Observations {
    Observations {
        label: "DESI DR2 Data",
        x: vec![0.5, 1.0, 1.5, 2.0],
        y: vec![83.0, 95.0, 105.0, 120.0],
        err: vec![5.0, 6.0, 7.0, 8.0],
    }
}

/// Fractional d_L error for the supernova sample.
pub const PANTHEON_REL_ERR: f64 = 0.02;

/// Pantheon+ luminosity distances (Mpc), 20 redshifts over [0.1, 2.0].
pub fn pantheon_plus_distances() -> Observations {
    let x = linspace(0.1, 2.0, 20);
    let y: Vec<f64> = (1..=20).map(|i| 500.0 * i as f64).collect();
    let err = y.iter().map(|d| d * PANTHEON_REL_ERR).collect();
    Observations {
        label: "Pantheon+",
        x,
        y,
        err,
    }
}

/// Galaxy surface densities (arcmin^-2) at z = 8–10.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyCounts {
    pub z: Vec<f64>,
    pub without_environment: Vec<f64>,
    pub with_environment: Vec<f64>,
    pub jwst: Observations,
}

pub fn jwst_galaxy_counts() -> GalaxyCounts {
    let z = vec![8.0, 9.0, 10.0];
    GalaxyCounts {
        without_environment: vec![126.0, 125.0, 124.0],
        with_environment: vec![150.0, 149.0, 148.0],
        jwst: Observations {
            label: "JWST Data",
            x: z.clone(),
            y: vec![160.0, 159.0, 158.0],
            err: vec![10.0, 10.0, 10.0],
        },
        z,
    }
}

/// Multiplicative scatter of the DES points around ΛCDM.
pub const DES_NOISE_SIGMA: f64 = 0.05;
pub const DES_REL_ERR: f64 = 0.1;

/// DES Y3 C_ℓ: the reference spectrum times N(1, 0.05) noise.
pub fn des_y3_shear(ells: &[f64], reference: &[f64], seed: u64) -> Result<Observations> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = sample_gaussian(&mut rng, "des_noise", 1.0, DES_NOISE_SIGMA, ells.len())?;
    let y: Vec<f64> = reference.iter().zip(noise).map(|(c, n)| c * n).collect();
    let err = y.iter().map(|c| c * DES_REL_ERR).collect();
    Ok(Observations {
        label: "DES Y3 Data",
        x: ells.to_vec(),
        y,
        err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pantheon_layout() {
        let p = pantheon_plus_distances();
        assert_eq!(p.len(), 20);
        assert_eq!(p.y[0], 500.0);
        assert_eq!(p.y[19], 10_000.0);
        assert!((p.err[19] - 200.0).abs() < 1e-9);
        assert!((p.x[19] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn des_noise_is_seeded_and_small() {
        let ells = [10.0, 100.0, 1000.0];
        let reference = [3.0e-9, 1.0e-9, 0.5e-9];
        let a = des_y3_shear(&ells, &reference, 7).unwrap();
        let b = des_y3_shear(&ells, &reference, 7).unwrap();
        assert_eq!(a, b);
        for (obs, r) in a.y.iter().zip(reference) {
            // 6σ envelope
            assert!((obs / r - 1.0).abs() < 0.3);
        }
    }

    #[test]
    fn galaxy_tables_align() {
        let g = jwst_galaxy_counts();
        assert_eq!(g.z.len(), g.without_environment.len());
        assert_eq!(g.z.len(), g.with_environment.len());
        assert_eq!(g.jwst.x, g.z);
    }
}
