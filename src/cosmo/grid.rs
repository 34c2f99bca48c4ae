//! cosmo/grid.rs — sample grids, finite differences and table interpolation.

use crate::error::{CosmoError, Result};

/// `n` evenly spaced samples over `[start, stop]` (both ends included).
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// `n` samples spaced evenly in log10 between `10^lo_exp` and `10^hi_exp`.
pub fn logspace(lo_exp: f64, hi_exp: f64, n: usize) -> Vec<f64> {
    linspace(lo_exp, hi_exp, n)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

/// Derivative of uniformly spaced samples.
///
/// Central differences inside, first-order one-sided differences at both ends.
pub fn gradient(values: &[f64], spacing: f64) -> Result<Vec<f64>> {
    let n = values.len();
    if n < 2 {
        return Err(CosmoError::TooFewSamples {
            what: "gradient",
            min: 2,
            got: n,
        });
    }
    let mut out = vec![0.0; n];
    out[0] = (values[1] - values[0]) / spacing;
    out[n - 1] = (values[n - 1] - values[n - 2]) / spacing;
    for i in 1..n - 1 {
        out[i] = (values[i + 1] - values[i - 1]) / (2.0 * spacing);
    }
    Ok(out)
}

/// Derivative of samples taken at arbitrary ascending or descending coordinates.
pub fn gradient_on(values: &[f64], coords: &[f64]) -> Result<Vec<f64>> {
    let n = values.len();
    if coords.len() != n {
        return Err(CosmoError::LengthMismatch {
            what: "gradient_on",
            left: n,
            right: coords.len(),
        });
    }
    if n < 2 {
        return Err(CosmoError::TooFewSamples {
            what: "gradient_on",
            min: 2,
            got: n,
        });
    }
    let mut out = vec![0.0; n];
    out[0] = (values[1] - values[0]) / (coords[1] - coords[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (coords[n - 1] - coords[n - 2]);
    for i in 1..n - 1 {
        let hs = coords[i] - coords[i - 1];
        let hd = coords[i + 1] - coords[i];
        out[i] = (hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i]
            - hd * hd * values[i - 1])
            / (hs * hd * (hd + hs));
    }
    Ok(out)
}

/// Running left sum `cumsum(values) * dx`.
pub fn cumulative_sum(values: &[f64], dx: f64) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc * dx)
        })
        .collect()
}

/// Linear interpolation that holds the end values outside `xs`.
///
/// `xs` must be ascending.
pub fn interp_clamped(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n == 0 {
        return f64::NAN;
    }
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }
    let hi = xs.partition_point(|&v| v <= x).clamp(1, n - 1);
    let lo = hi - 1;
    lerp(x, xs[lo], xs[hi], ys[lo], ys[hi])
}

/// Pass `values` through, or name the first non-finite sample.
pub fn ensure_finite(what: &'static str, values: Vec<f64>) -> Result<Vec<f64>> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CosmoError::NonFinite { what, index }),
        None => Ok(values),
    }
}

#[inline]
fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    if dx == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / dx
}

/// Piecewise-linear table that extrapolates from its end segments.
#[derive(Clone, Debug)]
pub struct LinearInterp {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterp {
    /// Build from samples in any order; the table is sorted by `xs`.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(CosmoError::LengthMismatch {
                what: "LinearInterp",
                left: xs.len(),
                right: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(CosmoError::TooFewSamples {
                what: "LinearInterp",
                min: 2,
                got: xs.len(),
            });
        }
        let mut pairs: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (xs, ys) = pairs.into_iter().unzip();
        Ok(Self { xs, ys })
    }

    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let hi = self.xs.partition_point(|&v| v <= x).clamp(1, n - 1);
        let lo = hi - 1;
        lerp(x, self.xs[lo], self.xs[hi], self.ys[lo], self.ys[hi])
    }

    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
