use crate::{PkError, PkResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through, or report it as non-finite under the name `what`.
pub fn ensure_finite(v: Real, what: &'static str) -> PkResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PkError::NonFinite { what, value: v })
    }
}

/// `10^x`, the inverse of a p-function.
#[inline]
pub fn pow10(x: Real) -> Real {
    Real::powf(10.0, x)
}

/// Normalize a set of base-10 log weights into fractions that sum to one.
///
/// The largest exponent is subtracted before exponentiating, so weights far
/// outside the representable range of `f64` still produce finite fractions.
/// An empty input yields an empty output.
pub fn normalize_log10_weights(log_weights: &[Real]) -> Vec<Real> {
    let max = log_weights
        .iter()
        .copied()
        .fold(Real::NEG_INFINITY, Real::max);
    if !max.is_finite() {
        return Vec::new();
    }

    let scaled: Vec<Real> = log_weights.iter().map(|w| pow10(w - max)).collect();
    let sum: Real = scaled.iter().sum();
    scaled.into_iter().map(|w| w / sum).collect()
}
