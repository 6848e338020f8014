//! Closed-form ε thresholds from linear stability of the synchronized state.
//!
//! Perturbations transverse to the synchronized manifold grow per step by a
//! factor (1-ε)·e^λ, with λ = ln|μ| the local Lyapunov exponent. Requiring
//! that factor to sit at ±1 yields the synchronization window; requiring the
//! coupled update to reach the outer piecewise breakpoints, (1-ε)μ = ±3,
//! yields the escape reference lines.

use crate::error::GcmError;
use crate::maps::validate_mu;

/// Synchronization window (ε_inf, ε_sup) = (1 - 1/|μ|, 1 + 1/|μ|).
///
/// From (1-ε)·e^{λ_local} = ±1 at the linearized synchronized fixed point.
/// The upper bound may legitimately exceed 1.
pub fn sync_boundaries(mu: f64) -> Result<(f64, f64), GcmError> {
    validate_mu(mu)?;
    let inv = 1.0 / mu.abs();
    Ok((1.0 - inv, 1.0 + inv))
}

/// Escape reference lines, the two roots of (1-ε)μ = ±3, sorted ascending.
///
/// ε = 1 - 3/μ and ε = 1 + 3/μ. These mark where the coupled update can
/// push the state past the outer breakpoints; whether escape actually occurs
/// depends on the states visited, so they are annotations, not guarantees.
pub fn escape_boundaries(mu: f64) -> Result<(f64, f64), GcmError> {
    validate_mu(mu)?;
    let eps1 = 1.0 - 3.0 / mu;
    let eps2 = 1.0 + 3.0 / mu;
    if eps1 <= eps2 {
        Ok((eps1, eps2))
    } else {
        Ok((eps2, eps1))
    }
}
