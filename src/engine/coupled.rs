//! Globally coupled map ensemble: state, initialization modes, dynamics.
//!
//! The engine is a two-state machine. After construction the state vector is
//! zero-filled and *uninitialized*; an explicit [`GloballyCoupledMaps::init`]
//! call populates it and makes the system *ready*. Each step applies the
//! local map to the whole vector in a single pass, mixes in the ensemble
//! mean, and records which sites left [-1, 1]. Escape is an expected,
//! first-class outcome reported through the mask — never an error.

use ndarray::{s, Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::engine::Config;
use crate::error::GcmError;
use crate::maps::{bistable_intervals, bistable_map_into};

/// Initial-condition sampling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// ⌊N/2⌋ sites uniform in I₊, the rest in I₋, then shuffled.
    /// Requires the bistable regime 1 < |μ| < 2.
    HalfHalf,
    /// All sites iid uniform in [-1, 1). Always legal.
    Uniform,
}

/// Ensemble of N globally coupled bistable maps.
///
/// Owns its state vector and pseudorandom generator exclusively; independent
/// instances share nothing and may run on separate threads without
/// synchronization.
pub struct GloballyCoupledMaps {
    cfg: Config,
    rng: StdRng,
    x: Array1<f64>,
    /// Scratch buffer for f(x; μ), reused across steps.
    buf: Array1<f64>,
    escaped: Option<Array1<bool>>,
    ready: bool,
}

impl GloballyCoupledMaps {
    /// Construct an uninitialized system from a validated configuration.
    pub fn new(cfg: Config) -> Self {
        let rng = match cfg.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let n = cfg.n();
        Self {
            cfg,
            rng,
            x: Array1::zeros(n),
            buf: Array1::zeros(n),
            escaped: None,
            ready: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Current state vector (zeros until initialized).
    pub fn state(&self) -> &Array1<f64> {
        &self.x
    }

    /// Escape mask from the most recent step; `None` before the first step
    /// and after every (re-)initialization.
    pub fn last_escaped_mask(&self) -> Option<&Array1<bool>> {
        self.escaped.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Populate the state vector using the engine's own generator.
    pub fn init(&mut self, mode: InitMode) -> Result<(), GcmError> {
        let x = draw_state(self.cfg.n(), self.cfg.mu(), mode, &mut self.rng)?;
        self.x = x;
        self.escaped = None;
        self.ready = true;
        Ok(())
    }

    /// Populate the state vector using an external generator.
    ///
    /// The caller keeps ownership of `rng`; sharing one generator across
    /// instances is legal but must be serialized by the caller.
    pub fn init_with<R: Rng + ?Sized>(&mut self, mode: InitMode, rng: &mut R) -> Result<(), GcmError> {
        let x = draw_state(self.cfg.n(), self.cfg.mu(), mode, rng)?;
        self.x = x;
        self.escaped = None;
        self.ready = true;
        Ok(())
    }

    /// Advance the ensemble by one time step.
    ///
    /// Computes y = f(x; μ) over the full vector, then
    ///
    ///   x ← (1-ε)·y + ε·mean(y)
    ///
    /// and sets the escape mask to |x| > 1 (strict) elementwise. Fully
    /// deterministic given the prior state and configuration.
    pub fn step(&mut self) -> Result<(), GcmError> {
        if !self.ready {
            return Err(GcmError::Uninitialized);
        }

        bistable_map_into(self.x.view(), self.cfg.mu(), &mut self.buf)?;
        let mean_y = self.buf.sum() / self.cfg.n() as f64;
        let eps = self.cfg.eps();
        for (xi, &yi) in self.x.iter_mut().zip(self.buf.iter()) {
            *xi = (1.0 - eps) * yi + eps * mean_y;
        }
        self.escaped = Some(self.x.mapv(|v| v.abs() > 1.0));
        Ok(())
    }

    /// Run `total_steps` steps, optionally collecting the trajectory.
    ///
    /// With `track`, every post-step state is recorded and the first
    /// `discard` rows are dropped, so the returned trajectory has shape
    /// `(total_steps - discard, N)`; `discard` must then lie in
    /// `[0, total_steps - 1]`. Without `track`, `discard` is ignored and no
    /// trajectory is built. The escape mask always reflects only the final
    /// step. A failing call leaves the state exactly as of the last
    /// completed step.
    pub fn run(
        &mut self,
        total_steps: usize,
        discard: usize,
        track: bool,
    ) -> Result<Option<Array2<f64>>, GcmError> {
        if total_steps == 0 {
            return Err(GcmError::ZeroSteps);
        }
        if track && discard >= total_steps {
            return Err(GcmError::DiscardOutOfRange {
                discard,
                total_steps,
            });
        }

        if track {
            let mut traj = Array2::zeros((total_steps, self.cfg.n()));
            for t in 0..total_steps {
                self.step()?;
                traj.row_mut(t).assign(&self.x);
            }
            Ok(Some(traj.slice(s![discard.., ..]).to_owned()))
        } else {
            for _ in 0..total_steps {
                self.step()?;
            }
            Ok(None)
        }
    }
}

/// Sample a fresh state vector for the requested mode.
fn draw_state<R: Rng + ?Sized>(
    n: usize,
    mu: f64,
    mode: InitMode,
    rng: &mut R,
) -> Result<Array1<f64>, GcmError> {
    match mode {
        InitMode::Uniform => {
            let unit = Uniform::new(-1.0, 1.0).expect("unit interval is non-degenerate");
            let mut vals: Vec<f64> = Vec::with_capacity(n);
            for _ in 0..n {
                vals.push(unit.sample(rng));
            }
            Ok(Array1::from_vec(vals))
        }
        InitMode::HalfHalf => {
            let (i_minus, i_plus) = bistable_intervals(mu)?;
            let plus =
                Uniform::new(i_plus.lo, i_plus.hi).expect("bistable intervals are non-degenerate");
            let minus = Uniform::new(i_minus.lo, i_minus.hi)
                .expect("bistable intervals are non-degenerate");

            let half = n / 2;
            let mut vals: Vec<f64> = Vec::with_capacity(n);
            for _ in 0..half {
                vals.push(plus.sample(rng));
            }
            for _ in 0..n - half {
                vals.push(minus.sample(rng));
            }
            // unordered spatial arrangement of the two populations
            vals.shuffle(rng);
            Ok(Array1::from_vec(vals))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::bistable_map;

    fn system(n: usize, eps: f64, mu: f64, seed: u64) -> GloballyCoupledMaps {
        GloballyCoupledMaps::new(Config::new(n, eps, mu, Some(seed)).unwrap())
    }

    #[test]
    fn test_construction_is_uninitialized_zeros() {
        let sys = system(16, 0.5, 1.9, 1);
        assert!(!sys.is_ready());
        assert_eq!(sys.state().len(), 16);
        assert!(sys.state().iter().all(|&v| v == 0.0));
        assert!(sys.last_escaped_mask().is_none());
    }

    #[test]
    fn test_step_before_init_is_usage_error() {
        let mut sys = system(16, 0.5, 1.9, 1);
        assert_eq!(sys.step(), Err(GcmError::Uninitialized));
        assert_eq!(sys.run(10, 0, false), Err(GcmError::Uninitialized));
        // state untouched by the failing calls
        assert!(sys.state().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_half_half_init_lands_in_attractor_intervals() {
        let mu = 1.9;
        let mut sys = system(400, 0.6, mu, 42);
        sys.init(InitMode::HalfHalf).unwrap();

        let (i_minus, i_plus) = bistable_intervals(mu).unwrap();
        assert!(sys
            .state()
            .iter()
            .all(|&v| i_minus.contains(v) || i_plus.contains(v)));

        // populations split evenly; I_+ is strictly positive for mu = 1.9
        let frac_plus = sys.state().iter().filter(|&&v| v > 0.0).count() as f64 / 400.0;
        assert!((0.45..=0.55).contains(&frac_plus), "frac = {frac_plus}");
        assert!(sys.last_escaped_mask().is_none());
        assert!(sys.is_ready());
    }

    #[test]
    fn test_half_half_requires_bistable_regime() {
        let mut sys = system(64, 0.5, 2.5, 3);
        assert_eq!(
            sys.init(InitMode::HalfHalf),
            Err(GcmError::OutsideBistableRegime(2.5))
        );
        assert!(!sys.is_ready());
    }

    #[test]
    fn test_uniform_init_in_unit_interval_any_mu() {
        // mu outside the bistable regime is fine for uniform ICs
        let mut sys = system(300, 0.5, 2.5, 7);
        sys.init(InitMode::Uniform).unwrap();
        assert!(sys.state().iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_step_matches_manual_reconstruction() {
        let (n, eps, mu) = (256, 0.7, 1.9);
        let mut sys = system(n, eps, mu, 7);
        sys.init(InitMode::HalfHalf).unwrap();

        let x0 = sys.state().clone();
        sys.step().unwrap();

        let y = bistable_map(x0.view(), mu).unwrap();
        let mean_y = y.sum() / n as f64;
        for i in 0..n {
            let manual = (1.0 - eps) * y[i] + eps * mean_y;
            assert!(
                (sys.state()[i] - manual).abs() < 1e-12,
                "site {i}: {} vs {manual}",
                sys.state()[i]
            );
        }
    }

    #[test]
    fn test_run_trajectory_shape_and_mask_shape() {
        let mut sys = system(128, 0.2, 1.9, 123);
        sys.init(InitMode::HalfHalf).unwrap();

        let traj = sys.run(50, 10, true).unwrap().unwrap();
        assert_eq!(traj.dim(), (40, 128));
        assert_eq!(sys.last_escaped_mask().unwrap().len(), 128);

        // final trajectory row is the current state
        let last = traj.row(39);
        for i in 0..128 {
            assert_eq!(last[i], sys.state()[i]);
        }
    }

    #[test]
    fn test_run_validation_errors() {
        let mut sys = system(32, 0.2, 1.9, 5);
        sys.init(InitMode::HalfHalf).unwrap();

        assert_eq!(sys.run(0, 0, false), Err(GcmError::ZeroSteps));
        assert_eq!(
            sys.run(10, 10, true),
            Err(GcmError::DiscardOutOfRange {
                discard: 10,
                total_steps: 10
            })
        );
        // discard is ignored when not tracking
        assert_eq!(sys.run(10, 10, false), Ok(None));
    }

    #[test]
    fn test_no_escape_with_zero_coupling() {
        // eps = 0: x' = f(x) and |f| <= |mu|/3 < 1, so no site can escape
        let mut sys = system(64, 0.0, 1.9, 11);
        sys.init(InitMode::HalfHalf).unwrap();
        sys.run(100, 0, false).unwrap();
        let mask = sys.last_escaped_mask().unwrap();
        assert_eq!(mask.len(), 64);
        assert!(mask.iter().all(|&e| !e));
    }

    #[test]
    fn test_strong_negative_coupling_produces_escape() {
        // (1-eps) = 6 amplifies the mapped values well past the unit interval
        let mut sys = system(200, -5.0, 1.9, 17);
        sys.init(InitMode::HalfHalf).unwrap();
        sys.step().unwrap();
        assert!(sys.last_escaped_mask().unwrap().iter().any(|&e| e));
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut a = system(128, 0.65, 1.9, 2024);
        let mut b = system(128, 0.65, 1.9, 2024);
        a.init(InitMode::HalfHalf).unwrap();
        b.init(InitMode::HalfHalf).unwrap();
        a.run(25, 0, false).unwrap();
        b.run(25, 0, false).unwrap();
        assert_eq!(a.state(), b.state());
        assert_eq!(a.last_escaped_mask().unwrap(), b.last_escaped_mask().unwrap());
    }

    #[test]
    fn test_init_with_external_generator() {
        let cfg = Config::new(64, 0.5, 1.9, None).unwrap();
        let mut a = GloballyCoupledMaps::new(cfg);
        let mut b = GloballyCoupledMaps::new(cfg);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        a.init_with(InitMode::HalfHalf, &mut rng_a).unwrap();
        b.init_with(InitMode::HalfHalf, &mut rng_b).unwrap();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_reinit_clears_escape_mask() {
        let mut sys = system(32, 0.4, 1.9, 9);
        sys.init(InitMode::HalfHalf).unwrap();
        sys.step().unwrap();
        assert!(sys.last_escaped_mask().is_some());
        sys.init(InitMode::Uniform).unwrap();
        assert!(sys.last_escaped_mask().is_none());
    }
}
