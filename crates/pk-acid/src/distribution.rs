//! Fractional distribution (alpha) of a polyprotic acid over pH.
//!
//! For n dissociation steps the unnormalized weight of species k
//! (k = 0 fully protonated, k = n fully deprotonated) is
//!
//! ```text
//! w[k] = Ka[0] * .. * Ka[k-1] * [H3O+]^(n-k)
//! ```
//!
//! and `alpha[k] = w[k] / sum(w)`. The weights are formed in log10 space,
//! `log10 w[k] = -(pKa[0] + .. + pKa[k-1]) - (n-k) * pH`, and normalized
//! against the largest one, so products of many small constants never
//! underflow before the division.

use crate::grid::PhGrid;
use pk_core::numeric::{Real, normalize_log10_weights};
use rayon::prelude::*;

/// Grids at least this long are evaluated point-parallel.
const PARALLEL_THRESHOLD: usize = 2048;

/// Alpha fractions of every species at one pH value.
///
/// Returns `pka.len() + 1` fractions summing to one. With no pKa values the
/// single species has alpha 1.
pub fn fractions_at(pka: &[Real], ph: Real) -> Vec<Real> {
    let n = pka.len();
    let mut log_weights = Vec::with_capacity(n + 1);
    let mut pka_sum: Real = 0.0;

    for k in 0..=n {
        log_weights.push(-pka_sum - (n - k) as Real * ph);
        if let Some(p) = pka.get(k) {
            pka_sum += p;
        }
    }

    normalize_log10_weights(&log_weights)
}

/// Alpha curves over a grid, species-major: `curves[k][i]` is the fraction of
/// species k at grid point i.
pub fn alpha_curves(pka: &[Real], grid: &PhGrid) -> Vec<Vec<Real>> {
    let per_point: Vec<Vec<Real>> = if grid.len() >= PARALLEL_THRESHOLD {
        grid.ph().par_iter().map(|&ph| fractions_at(pka, ph)).collect()
    } else {
        grid.ph().iter().map(|&ph| fractions_at(pka, ph)).collect()
    };

    (0..=pka.len())
        .map(|k| per_point.iter().map(|fracs| fracs[k]).collect())
        .collect()
}

/// `log10(alpha * total)` for every value of every curve.
pub fn log_concentration_curves(alpha: &[Vec<Real>], total_mol_per_l: Real) -> Vec<Vec<Real>> {
    alpha
        .iter()
        .map(|curve| {
            curve
                .iter()
                .map(|a| (a * total_mol_per_l).log10())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;
    use pk_core::numeric::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };

    #[test]
    fn no_steps_is_all_one() {
        assert_eq!(fractions_at(&[], 0.0), vec![1.0]);
        assert_eq!(fractions_at(&[], 14.0), vec![1.0]);
    }

    #[test]
    fn monoprotic_half_at_pka() {
        let fracs = fractions_at(&[4.76], 4.76);
        assert!(nearly_equal(fracs[0], 0.5, TOL));
        assert!(nearly_equal(fracs[1], 0.5, TOL));
    }

    #[test]
    fn monoprotic_matches_henderson_hasselbalch() {
        // alpha1 = Ka / (Ka + [H+])
        for ph in [1.0, 3.3, 4.76, 6.0, 11.5] {
            let ka = 10f64.powf(-4.76);
            let h = 10f64.powf(-ph);
            let fracs = fractions_at(&[4.76], ph);
            assert!(nearly_equal(fracs[1], ka / (ka + h), TOL), "pH {ph}");
        }
    }

    #[test]
    fn diprotic_matches_direct_formula() {
        let (pk1, pk2) = (1.25, 4.27);
        let (k1, k2) = (10f64.powf(-pk1), 10f64.powf(-pk2));
        for ph in [0.0, 2.0, 2.76, 7.0, 14.0] {
            let h = 10f64.powf(-ph);
            let d = h * h + k1 * h + k1 * k2;
            let fracs = fractions_at(&[pk1, pk2], ph);
            assert!(nearly_equal(fracs[0], h * h / d, TOL));
            assert!(nearly_equal(fracs[1], k1 * h / d, TOL));
            assert!(nearly_equal(fracs[2], k1 * k2 / d, TOL));
        }
    }

    #[test]
    fn many_steps_stay_finite() {
        // Ka products reach 10^-390 here, below f64's smallest subnormal
        let pka: Vec<Real> = (0..30).map(|i| 13.0 + i as Real * 0.01).collect();
        let fracs = fractions_at(&pka, 0.0);
        assert_eq!(fracs.len(), 31);
        assert!(fracs.iter().all(|f| f.is_finite()));
        let sum: Real = fracs.iter().sum();
        assert!(nearly_equal(sum, 1.0, TOL));
        assert!(nearly_equal(fracs[0], 1.0, TOL));
    }

    #[test]
    fn curves_are_species_major() {
        let grid = PhGrid::shared();
        let curves = alpha_curves(&[2.0, 9.0], &grid);
        assert_eq!(curves.len(), 3);
        assert!(curves.iter().all(|c| c.len() == grid.len()));
    }

    #[test]
    fn parallel_path_matches_serial() {
        let fine = PhGrid::new(GridSpec {
            start: 0.0,
            end: 14.0,
            step: 0.005,
            pkw: 14.0,
        })
        .unwrap();
        assert!(fine.len() >= PARALLEL_THRESHOLD);

        let pka = [2.17, 9.19, 10.47];
        let curves = alpha_curves(&pka, &fine);
        for (i, &ph) in fine.ph().iter().enumerate() {
            let expected = fractions_at(&pka, ph);
            for k in 0..expected.len() {
                assert_eq!(curves[k][i], expected[k]);
            }
        }
    }

    #[test]
    fn log_concentration_is_log_of_product() {
        let alpha = vec![vec![0.25, 1.0], vec![0.75, 0.0]];
        let logc = log_concentration_curves(&alpha, 0.1);
        assert_eq!(logc[0][0], (0.25_f64 * 0.1).log10());
        assert_eq!(logc[0][1], (0.1_f64).log10());
        assert_eq!(logc[1][1], Real::NEG_INFINITY);
    }
}
