//! Metrics: Order/Disorder Statistics over State Trajectories
//!
//! Stateless functions from raw state arrays to scalars and curves:
//! instantaneous dispersion, spin mapping, magnetization, order parameter
//! and the persistence curve. Independent of the engine internals.

mod stats;

pub use stats::{
    dispersion, magnetization, mean_dispersion, order_parameter, persistence_curve, spins,
};
