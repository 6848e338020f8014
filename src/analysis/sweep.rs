//! 1-D coupling sweep at fixed μ.
//!
//! For each ε on the grid: build a fresh engine with a per-point seed,
//! initialize, burn in, then measure dispersion and escape activity over the
//! measurement window. Each grid point is an independent, exclusively owned
//! system, so callers may shard the grid across threads if they wish.

use ndarray::Array1;

use crate::boundaries::{escape_boundaries, sync_boundaries};
use crate::engine::{Config, GloballyCoupledMaps, InitMode};
use crate::error::GcmError;
use crate::metrics::{dispersion, mean_dispersion};

/// Sweep parameters with conventional defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParams {
    /// System size per grid point.
    pub n: usize,
    /// Transient steps discarded before measuring.
    pub t_burn: usize,
    /// Measurement steps.
    pub t_meas: usize,
    /// Initial-condition mode.
    pub init: InitMode,
    /// Base seed; grid point k uses `seed_base + k`. `None` draws from OS
    /// entropy and the sweep is no longer reproducible.
    pub seed_base: Option<u64>,
    /// Dispersion threshold below which a point counts as synchronized.
    pub tol_sync: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            n: 256,
            t_burn: 2000,
            t_meas: 2000,
            init: InitMode::HalfHalf,
            seed_base: Some(12345),
            tol_sync: 1e-7,
        }
    }
}

/// Result of a 1-D ε sweep at fixed μ. All arrays are indexed by grid point.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub mu: f64,
    pub eps_grid: Array1<f64>,
    /// Time-averaged dispersion ⟨σ⟩ over the measurement window.
    pub sigma_mean: Array1<f64>,
    /// Fraction of measured steps in which at least one site escaped.
    pub escaped_frac: Array1<f64>,
    /// ⟨σ⟩ < tol_sync marker.
    pub is_synced: Array1<bool>,
    pub params: ScanParams,
}

/// Analytic boundary lines for overlaying on sweep results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheoryBoundaries {
    pub mu: f64,
    /// (ε_inf, ε_sup) synchronization window.
    pub sync: (f64, f64),
    /// (ε_low, ε_high) escape reference lines.
    pub escape: (f64, f64),
}

/// Collect the analytic boundaries of interest for a given μ.
pub fn theory_boundaries(mu: f64) -> Result<TheoryBoundaries, GcmError> {
    Ok(TheoryBoundaries {
        mu,
        sync: sync_boundaries(mu)?,
        escape: escape_boundaries(mu)?,
    })
}

/// Sweep ε and measure ⟨σ⟩, escape activity and synchronization at fixed μ.
pub fn scan_eps(mu: f64, eps_grid: &[f64], params: &ScanParams) -> Result<ScanResult, GcmError> {
    if params.t_meas == 0 {
        return Err(GcmError::ZeroSteps);
    }

    let k_total = eps_grid.len();
    let mut sigma_mean = Array1::zeros(k_total);
    let mut escaped_frac = Array1::zeros(k_total);
    let mut is_synced = Array1::from_elem(k_total, false);

    for (k, &eps) in eps_grid.iter().enumerate() {
        let seed = params.seed_base.map(|s| s + k as u64);
        let cfg = Config::new(params.n, eps, mu, seed)?;
        let mut sys = GloballyCoupledMaps::new(cfg);
        sys.init(params.init)?;

        if params.t_burn > 0 {
            sys.run(params.t_burn, 0, false)?;
        }

        let mut sigmas = Array1::zeros(params.t_meas);
        let mut escaped_steps = 0usize;
        for t in 0..params.t_meas {
            sys.step()?;
            sigmas[t] = dispersion(sys.state().view());
            if sys
                .last_escaped_mask()
                .is_some_and(|m| m.iter().any(|&e| e))
            {
                escaped_steps += 1;
            }
        }

        sigma_mean[k] = mean_dispersion(sigmas.view());
        escaped_frac[k] = escaped_steps as f64 / params.t_meas as f64;
        is_synced[k] = sigma_mean[k] < params.tol_sync;
    }

    Ok(ScanResult {
        mu,
        eps_grid: Array1::from_vec(eps_grid.to_vec()),
        sigma_mean,
        escaped_frac,
        is_synced,
        params: *params,
    })
}
