//! Bistable Local Map: Piecewise-Linear Odd Map with Two Chaotic Attractors
//!
//! The per-site map is odd and piecewise linear on [-1, 1]:
//!
//!   f(x; μ) = -2μ/3 - μx   for x ≤ -1/3
//!   f(x; μ) =  μx          for -1/3 < x < 1/3
//!   f(x; μ) =  2μ/3 - μx   for x ≥ 1/3
//!
//! The breakpoints ±1/3 belong to the outer branches (closed), not the
//! middle one. For 1 < |μ| < 2 the map is chaotic and bistable: two
//! symmetric attractor intervals I₋ and I₊ coexist, with
//!
//!   I₊ = [μ(2-μ)/3, μ/3],   I₋ = -I₊
//!
//! Because every branch has slope of modulus |μ|, the local Lyapunov
//! exponent is simply λ = ln|μ|.
//!
//! The map never clips its output: iterates may leave [-1, 1] ("escape"),
//! which is reported by the coupled engine rather than treated as an error.
//!
//! ## References
//!
//! - Alvarez-Llamoza & Cosenza, "Synchronization and phase ordering in
//!   globally coupled chaotic maps", 2014.

use ndarray::{Array1, ArrayView1};

use crate::error::GcmError;

const ONE_THIRD: f64 = 1.0 / 3.0;

/// Validate the local parameter μ.
///
/// Fails when μ is non-finite or |μ| is numerically indistinguishable from
/// zero (several downstream formulas divide by μ).
pub fn validate_mu(mu: f64) -> Result<(), GcmError> {
    if !mu.is_finite() {
        return Err(GcmError::NonFiniteMu(mu));
    }
    if mu.abs() < 1e-15 {
        return Err(GcmError::ZeroMu);
    }
    Ok(())
}

/// Branch dispatch for a single site. Breakpoints close the outer branches.
fn piecewise(x: f64, mu: f64) -> f64 {
    if x <= -ONE_THIRD {
        -2.0 * mu / 3.0 - mu * x
    } else if x < ONE_THIRD {
        mu * x
    } else {
        2.0 * mu / 3.0 - mu * x
    }
}

/// Apply f(·; μ) elementwise, allocating the output vector.
pub fn bistable_map(x: ArrayView1<f64>, mu: f64) -> Result<Array1<f64>, GcmError> {
    validate_mu(mu)?;
    Ok(x.mapv(|v| piecewise(v, mu)))
}

/// Apply f(·; μ) elementwise into a caller-provided buffer.
///
/// The buffer must have the same length as `x`; useful to avoid per-step
/// allocation in tight iteration loops.
pub fn bistable_map_into(
    x: ArrayView1<f64>,
    mu: f64,
    out: &mut Array1<f64>,
) -> Result<(), GcmError> {
    validate_mu(mu)?;
    if out.len() != x.len() {
        return Err(GcmError::BufferLenMismatch {
            expected: x.len(),
            got: out.len(),
        });
    }
    for (o, &v) in out.iter_mut().zip(x.iter()) {
        *o = piecewise(v, mu);
    }
    Ok(())
}

/// Closed real interval with ordered endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// Build an interval from two endpoints in either order.
    pub fn ordered(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Mirror image under negation; stays ordered.
    pub fn mirrored(&self) -> Self {
        Self {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

/// Attractor intervals (I₋, I₊) of the bistable regime.
///
/// Valid only for 1 < |μ| < 2; for μ < 0 the same formulas hold and the
/// endpoints are ordered after the fact. I₋ is the exact mirror of I₊.
pub fn bistable_intervals(mu: f64) -> Result<(Interval, Interval), GcmError> {
    validate_mu(mu)?;
    let abs_mu = mu.abs();
    if !(1.0 < abs_mu && abs_mu < 2.0) {
        return Err(GcmError::OutsideBistableRegime(mu));
    }

    let a_plus = mu * (2.0 - mu) / 3.0;
    let b_plus = mu / 3.0;
    let i_plus = Interval::ordered(a_plus, b_plus);
    Ok((i_plus.mirrored(), i_plus))
}

/// Local Lyapunov exponent λ = ln|μ|.
///
/// Constant because every branch of the map has slope of modulus |μ|; not
/// restricted to the bistable regime.
pub fn lyapunov_local(mu: f64) -> Result<f64, GcmError> {
    validate_mu(mu)?;
    Ok(mu.abs().ln())
}
