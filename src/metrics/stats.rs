//! Statistics used to classify the system regime.
//!
//! Synchronization is detected through near-zero dispersion, phase ordering
//! through the spin/magnetization mapping, and the memory of the initial
//! phase pattern through the persistence curve p_t.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::GcmError;

/// Instantaneous dispersion σ_t: population standard deviation across sites.
///
/// Near-zero dispersion signals a synchronized ensemble. Returns NaN for an
/// empty vector.
pub fn dispersion(x: ArrayView1<f64>) -> f64 {
    let n = x.len();
    if n == 0 {
        return f64::NAN;
    }
    let mean = x.sum() / n as f64;
    let var = x.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
    var.sqrt()
}

/// Map each site to a spin s_i ∈ {-1, +1}.
///
/// Convention: exactly 0.0 maps to +1.
pub fn spins(x: ArrayView1<f64>) -> Array1<i8> {
    x.mapv(|v| if v < 0.0 { -1i8 } else { 1 })
}

/// Instantaneous magnetization M_t = (1/N)·Σᵢ s_i.
pub fn magnetization(x: ArrayView1<f64>) -> f64 {
    let s = spins(x);
    if s.is_empty() {
        return f64::NAN;
    }
    s.iter().map(|&v| f64::from(v)).sum::<f64>() / s.len() as f64
}

/// Order parameter |⟨M⟩|: modulus of the time average of a magnetization
/// series. Measures long-run net bias between the two phases.
pub fn order_parameter(series: ArrayView1<f64>) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    (series.sum() / series.len() as f64).abs()
}

/// Persistence curve p_t over a (T, N) spin series ordered by time.
///
/// p_t is the fraction of sites whose spin has never differed from its value
/// at t = 0, for all t' ≤ t; p_0 = 1 by definition. Computed incrementally
/// in O(T·N) with a monotone per-site changed flag, never by pairwise
/// recomparison from scratch. An empty series is a usage error.
pub fn persistence_curve(spin_series: ArrayView2<i8>) -> Result<Array1<f64>, GcmError> {
    let (t_len, n) = spin_series.dim();
    if t_len == 0 || n == 0 {
        return Err(GcmError::EmptySpinSeries {
            rows: t_len,
            cols: n,
        });
    }

    let s0 = spin_series.row(0);
    let mut changed = vec![false; n];
    let mut p = Array1::zeros(t_len);
    p[0] = 1.0;

    for t in 1..t_len {
        let row = spin_series.row(t);
        let mut unchanged = 0usize;
        for i in 0..n {
            if row[i] != s0[i] {
                changed[i] = true;
            }
            if !changed[i] {
                unchanged += 1;
            }
        }
        p[t] = unchanged as f64 / n as f64;
    }
    Ok(p)
}

/// Time average of a pre-collected dispersion series.
///
/// Burn-in trimming is the caller's job; this takes the series as-is.
pub fn mean_dispersion(sigmas: ArrayView1<f64>) -> f64 {
    if sigmas.is_empty() {
        return f64::NAN;
    }
    sigmas.sum() / sigmas.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_dispersion_of_constant_state_is_zero() {
        let x = Array1::from_elem(10, 0.0);
        assert_eq!(dispersion(x.view()), 0.0);
        // constant nonzero state: mean rounding leaves only ~1e-16 residue
        let y = Array1::from_elem(10, 0.37);
        assert!(dispersion(y.view()).abs() < 1e-15);
    }

    #[test]
    fn test_dispersion_known_value() {
        // std of [-1, 1] around mean 0 is 1
        let x = array![-1.0, 1.0];
        assert!((dispersion(x.view()) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_spins_convention_zero_is_plus_one() {
        let x = array![-2.0, -0.1, 0.0, 0.1, 2.0];
        let s = spins(x.view());
        assert_eq!(s, array![-1i8, -1, 1, 1, 1]);
    }

    #[test]
    fn test_magnetization_is_mean_of_spins() {
        let x = array![-2.0, -0.1, 0.0, 0.1, 2.0];
        let s = spins(x.view());
        let expected = s.iter().map(|&v| f64::from(v)).sum::<f64>() / 5.0;
        assert!((magnetization(x.view()) - expected).abs() < 1e-15);
        assert!((magnetization(x.view()) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_order_parameter_takes_modulus() {
        let series = array![-0.5, -0.25, -0.75];
        assert!((order_parameter(series.view()) - 0.5).abs() < 1e-15);
        let balanced = array![0.5, -0.5];
        assert!(order_parameter(balanced.view()).abs() < 1e-15);
    }

    #[test]
    fn test_persistence_curve_synthetic_series() {
        // rows 1..3 differ from row 0 in exactly two fixed columns
        let s: Array2<i8> = array![
            [1, 1, 1, -1, -1, -1],
            [1, -1, 1, -1, 1, -1],
            [1, -1, 1, -1, 1, -1],
            [1, -1, 1, -1, 1, -1],
        ];
        let p = persistence_curve(s.view()).unwrap();
        let expected = [1.0, 4.0 / 6.0, 4.0 / 6.0, 4.0 / 6.0];
        assert_eq!(p.len(), 4);
        for (t, &e) in expected.iter().enumerate() {
            assert!((p[t] - e).abs() < 1e-15, "t = {t}");
        }
    }

    #[test]
    fn test_persistence_flag_is_monotone() {
        // a site that flips and returns still counts as changed
        let s: Array2<i8> = array![[1, 1], [1, -1], [1, 1]];
        let p = persistence_curve(s.view()).unwrap();
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], 0.5);
        assert_eq!(p[2], 0.5);
    }

    #[test]
    fn test_persistence_rejects_empty_series() {
        let empty_rows: Array2<i8> = Array2::zeros((0, 4));
        assert!(matches!(
            persistence_curve(empty_rows.view()),
            Err(GcmError::EmptySpinSeries { rows: 0, cols: 4 })
        ));
        let empty_cols: Array2<i8> = Array2::zeros((3, 0));
        assert!(matches!(
            persistence_curve(empty_cols.view()),
            Err(GcmError::EmptySpinSeries { rows: 3, cols: 0 })
        ));
    }

    #[test]
    fn test_mean_dispersion() {
        let sigmas = array![0.1, 0.2, 0.3];
        assert!((mean_dispersion(sigmas.view()) - 0.2).abs() < 1e-15);
        assert!(mean_dispersion(Array1::zeros(0).view()).is_nan());
    }
}
