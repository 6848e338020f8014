//! Analysis: Reproducible ε Sweeps against Analytic Boundaries
//!
//! Thin pipeline layer over the engine and metrics: scan the coupling ε at
//! fixed μ, measure the time-averaged dispersion, escape activity and a
//! numerical synchronization marker, and bundle the analytic boundary lines
//! for comparison. Output formatting (CSV, figures) is left to callers.

mod sweep;

pub use sweep::{scan_eps, theory_boundaries, ScanParams, ScanResult, TheoryBoundaries};
