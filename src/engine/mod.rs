//! Engine: Globally Coupled Map Ensemble
//!
//! An immutable [`Config`] plus the [`GloballyCoupledMaps`] state machine
//! that owns the state vector, its pseudorandom generator, and the per-step
//! escape mask. Update rule:
//!
//!   xᵢ(t+1) = (1-ε)·f(xᵢ(t); μ) + (ε/N)·Σⱼ f(xⱼ(t); μ)

mod config;
mod coupled;

pub use config::Config;
pub use coupled::{GloballyCoupledMaps, InitMode};
