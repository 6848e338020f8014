//! Coupling Sweep: Synchronization and Escape vs Analytic Boundaries
//!
//! This binary sweeps the global coupling ε at fixed μ and compares the
//! measured order/disorder statistics against the closed-form boundary
//! predictions.
//!
//! ## Protocol
//!
//! 1. Compute the analytic synchronization window and escape lines for μ
//! 2. Sweep ε, measuring ⟨σ⟩ and escape activity per grid point
//! 3. Print the σ̄(ε) table with the analytic lines marked
//! 4. Re-run three representative couplings with trajectory tracking and
//!    report magnetization, order parameter and persistence

use ndarray::Array1;

use gcm_dynamics::{
    magnetization, order_parameter, persistence_curve, scan_eps, spins, theory_boundaries, Config,
    GloballyCoupledMaps, InitMode, ScanParams,
};

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Globally Coupled Maps: eps Sweep vs Analytic Boundaries");
    println!("═══════════════════════════════════════════════════════════════\n");

    // System parameters
    let mu = 1.9;
    let n_sites = 256;
    let t_burn = 1000;
    let t_meas = 1000;

    println!("System Parameters:");
    println!("  N = {} maps", n_sites);
    println!("  mu = {:.2} (bistable regime)", mu);
    println!("  T_burn = {}, T_meas = {}", t_burn, t_meas);
    println!();

    // Analytic boundaries
    let bounds = theory_boundaries(mu).expect("mu is valid");
    println!("Analytic Boundaries:");
    println!(
        "  sync window:  eps in ({:.4}, {:.4})",
        bounds.sync.0, bounds.sync.1
    );
    println!(
        "  escape lines: eps in ({:.4}, {:.4})  (reference only)",
        bounds.escape.0, bounds.escape.1
    );
    println!();

    // Sweep
    let eps_grid: Vec<f64> = (0..=24).map(|i| i as f64 * 0.05).collect();
    let params = ScanParams {
        n: n_sites,
        t_burn,
        t_meas,
        init: InitMode::HalfHalf,
        seed_base: Some(12345),
        tol_sync: 1e-7,
    };

    println!("Scanning {} eps values...", eps_grid.len());
    let res = scan_eps(mu, &eps_grid, &params).expect("scan parameters are valid");

    println!("\n   eps     <sigma>      escape%   state");
    println!("─────────────────────────────────────────────────");
    for k in 0..res.eps_grid.len() {
        let eps = res.eps_grid[k];
        let in_window = eps > bounds.sync.0 && eps < bounds.sync.1;
        let state = if res.is_synced[k] {
            "SYNC"
        } else if res.escaped_frac[k] > 0.0 {
            "escape"
        } else if in_window {
            "window"
        } else {
            "turbulent"
        };
        println!(
            "  {:5.2}   {:10.3e}   {:7.2}   {}",
            eps,
            res.sigma_mean[k],
            100.0 * res.escaped_frac[k],
            state
        );
    }

    // Detail runs at representative couplings
    println!("\n══════════════════════════════════════════════════════════════");
    println!("  Detail: Phase Ordering at Representative Couplings");
    println!("══════════════════════════════════════════════════════════════\n");

    for (eps, label) in [
        (0.2, "weak coupling (turbulent)"),
        (0.6, "near the sync boundary"),
        (1.0, "inside the sync window"),
    ] {
        let cfg = Config::new(n_sites, eps, mu, Some(777)).expect("valid parameters");
        let mut sys = GloballyCoupledMaps::new(cfg);
        sys.init(InitMode::HalfHalf).expect("bistable regime");

        let traj = sys
            .run(t_burn + t_meas, t_burn, true)
            .expect("valid run parameters")
            .expect("trajectory requested");

        let t_len = traj.nrows();
        let mut spin_series = ndarray::Array2::zeros((t_len, n_sites));
        let mut mags = Array1::zeros(t_len);
        for t in 0..t_len {
            let row = traj.row(t);
            spin_series.row_mut(t).assign(&spins(row));
            mags[t] = magnetization(row);
        }

        let p = persistence_curve(spin_series.view()).expect("non-empty series");
        let m_order = order_parameter(mags.view());

        println!("eps = {:.2} — {}", eps, label);
        println!("  order parameter |<M>| = {:.4}", m_order);
        println!("  final magnetization   = {:+.4}", mags[t_len - 1]);
        println!("  persistence p_T       = {:.4}", p[t_len - 1]);
        println!(
            "  escaped sites (final) = {}",
            sys.last_escaped_mask()
                .map_or(0, |m| m.iter().filter(|&&e| e).count())
        );
        println!();
    }

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Sweep Complete");
    println!("═══════════════════════════════════════════════════════════════");
}
