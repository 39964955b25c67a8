//! Beta function, log-beta, and the Beta density.

use crate::FloatScalar;

/// Natural logarithm of the beta function, ln B(p, q).
///
/// Computed as `ln_gamma(p) + ln_gamma(q) − ln_gamma(p+q)`, so it stays finite
/// for arguments where Γ itself overflows. Valid only for p, q > 0; no check
/// is made.
///
/// # Example
///
/// ```
/// use incbeta::special::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0_f64, 1.0).abs() < 1e-15);
///
/// // B(2, 3) = 1/12
/// assert!((lbeta(2.0_f64, 3.0) + 12.0_f64.ln()).abs() < 1e-15);
/// ```
pub fn lbeta<T: FloatScalar>(p: T, q: T) -> T {
    p.ln_gamma() + q.ln_gamma() - (p + q).ln_gamma()
}

/// Beta function B(p, q) = Γ(p)·Γ(q) / Γ(p+q).
///
/// Computed as `exp(lbeta(p, q))`.
///
/// # Example
///
/// ```
/// use incbeta::special::beta;
///
/// // B(0.5, 0.5) = π
/// assert!((beta(0.5_f64, 0.5) - core::f64::consts::PI).abs() < 1e-14);
/// ```
pub fn beta<T: FloatScalar>(p: T, q: T) -> T {
    lbeta(p, q).exp()
}

/// Log of the Beta(p, q) density at x.
///
/// (p−1)·ln x + (q−1)·ln(1−x) − ln B(p, q), with `log_beta` = [`lbeta`]`(p, q)`.
/// Returns −∞ for x outside [0, 1].
pub fn ln_beta_pdf<T: FloatScalar>(x: T, p: T, q: T, log_beta: T) -> T {
    if x < T::zero() || x > T::one() {
        return T::neg_infinity();
    }
    let one = T::one();
    (p - one) * x.ln() + (q - one) * (-x).ln_1p() - log_beta
}

/// Beta(p, q) density at x, x^{p−1}(1−x)^{q−1} / B(p, q).
///
/// Evaluated through [`ln_beta_pdf`] to avoid overflow in the power terms.
/// Returns 0 outside [0, 1].
///
/// # Example
///
/// ```
/// use incbeta::special::{beta_pdf, lbeta};
///
/// // Beta(2, 2) density is 6x(1−x)
/// let lb = lbeta(2.0_f64, 2.0);
/// assert!((beta_pdf(0.25, 2.0, 2.0, lb) - 1.125).abs() < 1e-14);
/// ```
pub fn beta_pdf<T: FloatScalar>(x: T, p: T, q: T, log_beta: T) -> T {
    if x < T::zero() || x > T::one() {
        return T::zero();
    }
    ln_beta_pdf(x, p, q, log_beta).exp()
}
