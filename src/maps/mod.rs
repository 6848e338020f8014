//! Local Map: Piecewise-Odd Bistable Map and Analytic Utilities
//!
//! Defines the per-site map f(x; μ), its chaotic attractor intervals I₋/I₊
//! in the bistable regime, and the local Lyapunov exponent.

mod bistable;

pub use bistable::{
    bistable_intervals, bistable_map, bistable_map_into, lyapunov_local, validate_mu, Interval,
};
