//! cosmo/growth.rs — linear growth factor D from the density-contrast ODE.
//!
//! Two forms are provided:
//! - redshift form: `δ'' = -(2 + dlnH/dz) δ' + 1.5 Ωm(z) δ`, from z = 0 upwards,
//!   normalised to D(0) = 1;
//! - scale-factor form: `δ'' = -(3/a + H'/H) δ' + 1.5 Ωm(a) δ / a²`, from a = 1
//!   downwards, normalised at the smallest scale factor.
//!
//! H is always supplied as a table so the lagged stretch recurrence and the
//! closed-form models go through the same path.

use tracing::debug;

use crate::cosmo::grid::{LinearInterp, gradient_on};
use crate::error::{CosmoError, Result};

pub type State = [f64; 2];

/// Fixed-step fourth-order Runge–Kutta over the output grid `xs`.
///
/// Each interval `[xs[i], xs[i+1]]` is split into `substeps` equal steps, so
/// the grid may be ascending or descending. Returns the state at every grid point.
pub fn integrate_rk4<F>(rhs: F, y0: State, xs: &[f64], substeps: usize) -> Result<Vec<State>>
where
    F: Fn(f64, State) -> State,
{
    if xs.is_empty() {
        return Ok(Vec::new());
    }
    let substeps = substeps.max(1);
    let mut out = Vec::with_capacity(xs.len());
    let mut y = y0;
    out.push(y);

    for w in xs.windows(2) {
        let h = (w[1] - w[0]) / substeps as f64;
        let mut x = w[0];
        for _ in 0..substeps {
            y = rk4_step(&rhs, x, y, h);
            x += h;
            if !(y[0].is_finite() && y[1].is_finite()) {
                return Err(CosmoError::IntegrationFailed { x });
            }
        }
        out.push(y);
    }
    Ok(out)
}

#[inline]
fn rk4_step<F>(rhs: &F, x: f64, y: State, h: f64) -> State
where
    F: Fn(f64, State) -> State,
{
    let k1 = rhs(x, y);
    let k2 = rhs(x + 0.5 * h, axpy(y, 0.5 * h, k1));
    let k3 = rhs(x + 0.5 * h, axpy(y, 0.5 * h, k2));
    let k4 = rhs(x + h, axpy(y, h, k3));
    [
        y[0] + h / 6.0 * (k1[0] + 2.0 * k2[0] + 2.0 * k3[0] + k4[0]),
        y[1] + h / 6.0 * (k1[1] + 2.0 * k2[1] + 2.0 * k3[1] + k4[1]),
    ]
}

#[inline]
fn axpy(y: State, a: f64, k: State) -> State {
    [y[0] + a * k[0], y[1] + a * k[1]]
}

/// Tabulated H(z) for one model, with the matter content used in Ωm(z).
#[derive(Clone, Debug)]
pub struct HubbleTable {
    pub h0: f64,
    pub omega_m: f64,
    h: LinearInterp,
    dh_dz: LinearInterp,
}

impl HubbleTable {
    pub fn new(zs: &[f64], h: &[f64], h0: f64, omega_m: f64) -> Result<Self> {
        let dh = gradient_on(h, zs)?;
        Ok(Self {
            h0,
            omega_m,
            h: LinearInterp::new(zs, h)?,
            dh_dz: LinearInterp::new(zs, &dh)?,
        })
    }

    #[inline]
    pub fn hubble(&self, z: f64) -> f64 {
        self.h.eval(z)
    }

    #[inline]
    pub fn dh_dz(&self, z: f64) -> f64 {
        self.dh_dz.eval(z)
    }

    /// Ωm(z) = Ωm (1+z)³ (H0/H)².
    #[inline]
    pub fn omega_m_at(&self, z: f64) -> f64 {
        let ratio = self.h0 / self.hubble(z);
        self.omega_m * (1.0 + z).powi(3) * ratio * ratio
    }
}

/// D(z) on `zs` (ascending, starting at the normalisation redshift).
pub fn growth_factor_redshift(table: &HubbleTable, zs: &[f64], substeps: usize) -> Result<Vec<f64>> {
    let rhs = |z: f64, y: State| {
        let [delta, delta_prime] = y;
        let dlnh_dz = table.dh_dz(z) / table.hubble(z);
        let d2 = -(2.0 + dlnh_dz) * delta_prime + 1.5 * table.omega_m_at(z) * delta;
        [delta_prime, d2]
    };
    let sol = integrate_rk4(rhs, [1.0, 0.0], zs, substeps)?;
    let norm = sol.first().map(|s| s[0]).unwrap_or(1.0);
    debug!(samples = sol.len(), "redshift-form growth solved");
    Ok(sol.iter().map(|s| s[0] / norm).collect())
}

/// Tabulated H(a) and dH/da for the scale-factor form.
#[derive(Clone, Debug)]
pub struct ScaleFactorTable {
    pub h0: f64,
    pub omega_m: f64,
    h: LinearInterp,
    dh_da: LinearInterp,
}

impl ScaleFactorTable {
    /// Build from H sampled on a redshift grid; `dH/da = dH/dz · (-(1+z)²)`.
    pub fn from_redshift(zs: &[f64], h: &[f64], h0: f64, omega_m: f64) -> Result<Self> {
        let dh_dz = gradient_on(h, zs)?;
        let a: Vec<f64> = zs.iter().map(|z| 1.0 / (1.0 + z)).collect();
        let dh_da: Vec<f64> = dh_dz
            .iter()
            .zip(zs)
            .map(|(d, z)| -d * (1.0 + z).powi(2))
            .collect();
        Ok(Self {
            h0,
            omega_m,
            h: LinearInterp::new(&a, h)?,
            dh_da: LinearInterp::new(&a, &dh_da)?,
        })
    }

    #[inline]
    pub fn hubble(&self, a: f64) -> f64 {
        self.h.eval(a)
    }

    #[inline]
    pub fn dh_da(&self, a: f64) -> f64 {
        self.dh_da.eval(a)
    }

    /// Ωm(a) = Ωm / (a³ (H/H0)²).
    #[inline]
    pub fn omega_m_at(&self, a: f64) -> f64 {
        let e = self.hubble(a) / self.h0;
        self.omega_m / (a.powi(3) * e * e)
    }
}

/// D on the scale-factor grid `a_grid` (starting at a = 1, descending),
/// normalised by the value at the last grid point.
pub fn growth_factor_scale(
    table: &ScaleFactorTable,
    a_grid: &[f64],
    substeps: usize,
) -> Result<Vec<f64>> {
    let rhs = |a: f64, y: State| {
        let [delta, ddelta] = y;
        let h = table.hubble(a);
        let d2 = -(3.0 / a + table.dh_da(a) / h) * ddelta
            + 1.5 * table.omega_m_at(a) * delta / (a * a);
        [ddelta, d2]
    };
    let sol = integrate_rk4(rhs, [1.0, 0.0], a_grid, substeps)?;
    let norm = sol.last().map(|s| s[0]).unwrap_or(1.0);
    if norm == 0.0 || !norm.is_finite() {
        return Err(CosmoError::NonFinite {
            what: "growth normalisation",
            index: sol.len().saturating_sub(1),
        });
    }
    debug!(samples = sol.len(), norm, "scale-factor growth solved");
    Ok(sol.iter().map(|s| s[0] / norm).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmo::grid::linspace;

    #[test]
    fn rk4_tracks_exponential() {
        // y0' = y0, y1' = 0
        let xs = linspace(0.0, 1.0, 11);
        let sol = integrate_rk4(|_, y| [y[0], 0.0], [1.0, 3.0], &xs, 10).unwrap();
        assert!((sol[10][0] - 1f64.exp()).abs() < 1e-8);
        assert_eq!(sol[10][1], 3.0);
    }

    #[test]
    fn rk4_runs_backwards() {
        let xs = linspace(1.0, 0.0, 11);
        let sol = integrate_rk4(|_, y| [y[0], 0.0], [1.0, 0.0], &xs, 10).unwrap();
        assert!((sol[10][0] - (-1f64).exp()).abs() < 1e-8);
    }

    #[test]
    fn rk4_reports_blowup() {
        let xs = linspace(0.0, 2.0, 3);
        let res = integrate_rk4(|_, y| [y[0] * y[0] * 1e300, 0.0], [1e10, 0.0], &xs, 1);
        assert!(matches!(res, Err(CosmoError::IntegrationFailed { .. })));
    }

    #[test]
    fn harmonic_oscillator_conserves_energy() {
        let xs = linspace(0.0, 10.0, 101);
        let sol = integrate_rk4(|_, y| [y[1], -y[0]], [1.0, 0.0], &xs, 8).unwrap();
        for s in &sol {
            let energy = s[0] * s[0] + s[1] * s[1];
            assert!((energy - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn redshift_growth_is_normalised_at_origin() {
        let zs = linspace(0.0, 2.0, 50);
        let h: Vec<f64> = zs
            .iter()
            .map(|z| 70.0 * (0.3 * (1.0 + z).powi(3) + 0.7f64).sqrt())
            .collect();
        let table = HubbleTable::new(&zs, &h, 70.0, 0.3).unwrap();
        let d = growth_factor_redshift(&table, &zs, 8).unwrap();
        assert_eq!(d.len(), 50);
        assert_eq!(d[0], 1.0);
        assert!(d.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn scale_growth_is_normalised_at_last_point() {
        let zs = linspace(0.0, 2.0, 100);
        let h: Vec<f64> = zs
            .iter()
            .map(|z| 70.0 * (0.3 * (1.0 + z).powi(3) + 0.7f64).sqrt())
            .collect();
        let table = ScaleFactorTable::from_redshift(&zs, &h, 70.0, 0.3).unwrap();
        let a: Vec<f64> = zs.iter().map(|z| 1.0 / (1.0 + z)).collect();
        let d = growth_factor_scale(&table, &a, 8).unwrap();
        assert!((d[99] - 1.0).abs() < 1e-12);
        assert!(d.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn omega_m_today_matches_parameter() {
        let zs = linspace(0.0, 1.0, 10);
        let h: Vec<f64> = zs
            .iter()
            .map(|z| 70.0 * (0.3 * (1.0 + z).powi(3) + 0.7f64).sqrt())
            .collect();
        let table = HubbleTable::new(&zs, &h, 70.0, 0.3).unwrap();
        assert!((table.omega_m_at(0.0) - 0.3).abs() < 1e-12);
        let sf = ScaleFactorTable::from_redshift(&zs, &h, 70.0, 0.3).unwrap();
        assert!((sf.omega_m_at(1.0) - 0.3).abs() < 1e-12);
    }
}
