//! Analytic Boundaries: Closed-Form Thresholds in Coupling Space
//!
//! Synchronization and escape thresholds in ε derived from linearizing the
//! globally coupled update around the synchronized state.

mod analytic;

pub use analytic::{escape_boundaries, sync_boundaries};
