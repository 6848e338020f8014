//! Error taxonomy for the coupled-map crate.
//!
//! Three families, all synchronous and raised at the offending call:
//! configuration errors (bad `Config` parameters), domain errors (operations
//! that require the bistable regime), and usage errors (contract violations
//! such as stepping an uninitialized system). A failing call never leaves
//! partially mutated state behind.

use thiserror::Error;

/// Errors produced by maps, boundaries, engine and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GcmError {
    /// System size N must be at least 1.
    #[error("system size must be positive")]
    ZeroSize,

    /// Global coupling must be a finite real.
    #[error("coupling eps must be finite, got {0}")]
    NonFiniteCoupling(f64),

    /// Local map parameter must be a finite real.
    #[error("mu must be finite, got {0}")]
    NonFiniteMu(f64),

    /// |mu| below 1e-15; several formulas divide by mu.
    #[error("mu must not be (numerically) zero; boundary formulas divide by mu")]
    ZeroMu,

    /// Operation requires the bistable regime 1 < |mu| < 2.
    #[error("bistable regime requires 1 < |mu| < 2, got mu = {0}")]
    OutsideBistableRegime(f64),

    /// `step`/`run` called before any initialization.
    #[error("state is uninitialized; call init() before stepping")]
    Uninitialized,

    /// `run` requires a positive number of steps.
    #[error("total_steps must be positive")]
    ZeroSteps,

    /// With trajectory tracking, discard must lie in [0, total_steps - 1].
    #[error("discard must lie in [0, {total_steps} - 1] when tracking, got {discard}")]
    DiscardOutOfRange { discard: usize, total_steps: usize },

    /// Output buffer does not match the input length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLenMismatch { expected: usize, got: usize },

    /// Spin series must contain at least one time row and one site column.
    #[error("spin series must be non-empty, got {rows} rows x {cols} cols")]
    EmptySpinSeries { rows: usize, cols: usize },
}
