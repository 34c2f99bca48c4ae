//! cosmo/posterior.rs — mock parameter posterior for the corner figure.
//!
//! Samples are independent Gaussians around the paper's best-fit values,
//! drawn by inverse-CDF from a seeded generator so figures are reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::cosmo::params::StretchParams;
use crate::error::{CosmoError, Result};

/// One marginal of the mock posterior.
#[derive(Clone, Debug, PartialEq)]
pub struct PosteriorParam {
    pub name: &'static str,
    pub label: &'static str,
    pub truth: f64,
    pub sigma: f64,
}

/// n, k_stretch, Ωm, H0 centred on `stretch` with the quoted 1σ widths.
pub fn posterior_params(stretch: &StretchParams) -> [PosteriorParam; 4] {
    [
        PosteriorParam {
            name: "n",
            label: "n",
            truth: stretch.n,
            sigma: 0.04,
        },
        PosteriorParam {
            name: "k_stretch",
            label: "k_stretch (s^-1)",
            truth: stretch.k_stretch,
            sigma: 0.06e-18,
        },
        PosteriorParam {
            name: "omega_m",
            label: "Ω_m",
            truth: stretch.omega_m,
            sigma: 0.006,
        },
        PosteriorParam {
            name: "h0",
            label: "H0 (km/s/Mpc)",
            truth: stretch.h0,
            sigma: 0.8,
        },
    ]
}

/// Quantiles quoted in the corner titles.
pub const CORNER_QUANTILES: [f64; 3] = [0.16, 0.5, 0.84];

/// `n` draws from N(mean, sd²).
pub fn sample_gaussian<R: Rng + ?Sized>(
    rng: &mut R,
    name: &'static str,
    mean: f64,
    sd: f64,
    n: usize,
) -> Result<Vec<f64>> {
    let dist = Normal::new(mean, sd).map_err(|e| CosmoError::InvalidDistribution {
        name,
        message: e.to_string(),
    })?;
    Ok((0..n)
        .map(|_| dist.inverse_cdf(rng.random_range(f64::EPSILON..1.0)))
        .collect())
}

/// Samples for every parameter, column-major (one `Vec` per parameter).
#[derive(Clone, Debug)]
pub struct Posterior {
    pub params: Vec<PosteriorParam>,
    pub samples: Vec<Vec<f64>>,
}

impl Posterior {
    pub fn draw(params: &[PosteriorParam], n: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = params
            .iter()
            .map(|p| sample_gaussian(&mut rng, p.name, p.truth, p.sigma, n))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            params: params.to_vec(),
            samples,
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.params.len()
    }

    pub fn summary(&self, idx: usize) -> Summary {
        Summary::of(&self.samples[idx])
    }

    /// Min/max of a column, padded so a constant column still has width.
    pub fn extent(&self, idx: usize) -> (f64, f64) {
        let col = &self.samples[idx];
        let lo = col.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            let p = &self.params[idx];
            return (p.truth - p.sigma, p.truth + p.sigma);
        }
        if hi - lo <= 0.0 {
            let pad = lo.abs().max(1.0) * 1e-6;
            return (lo - pad, hi + pad);
        }
        (lo, hi)
    }
}

/// Median with the 16th/84th percentile offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let [q_lo, q_mid, q_hi] = CORNER_QUANTILES;
        Self {
            lower: quantile_sorted(&sorted, q_lo),
            median: quantile_sorted(&sorted, q_mid),
            upper: quantile_sorted(&sorted, q_hi),
        }
    }

    #[inline]
    pub fn plus(&self) -> f64 {
        self.upper - self.median
    }

    #[inline]
    pub fn minus(&self) -> f64 {
        self.median - self.lower
    }
}

/// Linear-interpolation quantile (`h = (n - 1) q`) of ascending `sorted`;
/// NaN when empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Counts in `bins` equal bins over `[min, max]`, keyed by bin start.
/// Values on `max` fall into the last bin; values outside are dropped.
pub fn histogram(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<(f64, usize)> {
    if bins == 0 || max <= min {
        return Vec::new();
    }
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        if let Some(i) = bin_index(v, min, max, width, bins) {
            counts[i] += 1;
        }
    }
    (0..bins).map(|i| (min + i as f64 * width, counts[i])).collect()
}

/// Row-major `bins × bins` joint counts; row index follows `y`.
pub fn histogram_2d(
    xs: &[f64],
    ys: &[f64],
    x_range: (f64, f64),
    y_range: (f64, f64),
    bins: usize,
) -> Vec<Vec<usize>> {
    let mut grid = vec![vec![0usize; bins]; bins];
    if bins == 0 || x_range.1 <= x_range.0 || y_range.1 <= y_range.0 {
        return grid;
    }
    let wx = (x_range.1 - x_range.0) / bins as f64;
    let wy = (y_range.1 - y_range.0) / bins as f64;
    for (&x, &y) in xs.iter().zip(ys) {
        let ix = bin_index(x, x_range.0, x_range.1, wx, bins);
        let iy = bin_index(y, y_range.0, y_range.1, wy, bins);
        if let (Some(ix), Some(iy)) = (ix, iy) {
            grid[iy][ix] += 1;
        }
    }
    grid
}

#[inline]
fn bin_index(v: f64, min: f64, max: f64, width: f64, bins: usize) -> Option<usize> {
    if !(min..=max).contains(&v) {
        return None;
    }
    Some((((v - min) / width).floor() as usize).min(bins - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_reproducible_for_a_seed() {
        let params = posterior_params(&StretchParams::default());
        let a = Posterior::draw(&params, 200, 42).unwrap();
        let b = Posterior::draw(&params, 200, 42).unwrap();
        assert_eq!(a.samples, b.samples);
        let c = Posterior::draw(&params, 200, 43).unwrap();
        assert_ne!(a.samples, c.samples);
    }

    #[test]
    fn summaries_recover_inputs() {
        let params = posterior_params(&StretchParams::default());
        let post = Posterior::draw(&params, 10_000, 42).unwrap();
        for (i, p) in params.iter().enumerate() {
            let s = post.summary(i);
            assert!((s.median - p.truth).abs() < 0.1 * p.sigma, "{}", p.name);
            let half_width = 0.5 * (s.plus() + s.minus());
            assert!((half_width / p.sigma - 1.0).abs() < 0.1, "{}", p.name);
        }
    }

    #[test]
    fn quantiles_interpolate_between_order_statistics() {
        let s = Summary::of(&[4.0, 1.0, 3.0, 2.0, 5.0]);
        assert!((s.median - 3.0).abs() < 1e-12);
        // h = 4 * 0.16 = 0.64 and 4 * 0.84 = 3.36
        assert!((s.lower - 1.64).abs() < 1e-12);
        assert!((s.upper - 4.36).abs() < 1e-12);
        assert_eq!(quantile_sorted(&[1.0, 2.0], 0.5), 1.5);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn invalid_sigma_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let res = sample_gaussian(&mut rng, "bad", 0.0, -1.0, 10);
        assert!(matches!(
            res,
            Err(CosmoError::InvalidDistribution { name: "bad", .. })
        ));
    }

    #[test]
    fn histogram_keeps_upper_edge() {
        let h = histogram(&[0.0, 0.5, 1.0, 2.0], 0.0, 1.0, 2);
        assert_eq!(h, vec![(0.0, 1), (0.5, 2)]);
    }

    #[test]
    fn joint_histogram_counts_each_pair_once() {
        let xs = [0.1, 0.9, 0.9];
        let ys = [0.1, 0.1, 0.9];
        let g = histogram_2d(&xs, &ys, (0.0, 1.0), (0.0, 1.0), 2);
        assert_eq!(g, vec![vec![1, 1], vec![0, 1]]);
    }
}
