//! Shape parameters paired with their cached log-beta value.

use crate::special::{
    beta_pdf, check_shape, inc_beta, inv_inc_beta, inv_inc_beta_with, lbeta, InvSettings,
    Inversion, SpecialError,
};
use crate::FloatScalar;

/// Beta shape (p, q) together with ln B(p, q).
///
/// The unchecked functions in [`special`](crate::special) expect the caller to
/// pass ln B(p, q) in and to keep it in sync with p and q. `BetaShape` owns
/// that pairing: ln B is computed once in [`BetaShape::new`] and reused by
/// every evaluation. The value is `Copy` and immutable, so callers keep as
/// many shapes around as they need; nothing is cached globally.
///
/// # Example
///
/// ```
/// use incbeta::BetaShape;
///
/// let s = BetaShape::new(2.0_f64, 3.0).unwrap();
/// let y = s.inc_beta(0.5);
/// assert!((y - 0.6875).abs() < 1e-15);
/// assert!((s.inv_inc_beta(y) - 0.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaShape<T> {
    p: T,
    q: T,
    log_beta: T,
}

impl<T: FloatScalar> BetaShape<T> {
    /// Create a shape from `p` and `q`. Requires both finite and > 0.
    pub fn new(p: T, q: T) -> Result<Self, SpecialError> {
        check_shape(p, q)?;
        Ok(Self {
            p,
            q,
            log_beta: lbeta(p, q),
        })
    }

    /// First shape parameter.
    pub fn p(&self) -> T {
        self.p
    }

    /// Second shape parameter.
    pub fn q(&self) -> T {
        self.q
    }

    /// Cached ln B(p, q).
    pub fn log_beta(&self) -> T {
        self.log_beta
    }

    /// The shape (q, p) of the complementary integral.
    ///
    /// B is symmetric, so the cached ln B carries over unchanged.
    pub fn swap(&self) -> Self {
        Self {
            p: self.q,
            q: self.p,
            log_beta: self.log_beta,
        }
    }

    /// I_x(p, q). See [`inc_beta`].
    pub fn inc_beta(&self, x: T) -> T {
        inc_beta(x, self.p, self.q, self.log_beta)
    }

    /// x such that I_x(p, q) = alpha. See [`inv_inc_beta`].
    pub fn inv_inc_beta(&self, alpha: T) -> T {
        inv_inc_beta(alpha, self.p, self.q, self.log_beta)
    }

    /// Inverse with explicit settings. See [`inv_inc_beta_with`].
    pub fn inv_inc_beta_with(&self, alpha: T, settings: &InvSettings<T>) -> Inversion<T> {
        inv_inc_beta_with(alpha, self.p, self.q, self.log_beta, settings)
    }

    /// Beta(p, q) density at x. See [`beta_pdf`].
    pub fn pdf(&self, x: T) -> T {
        beta_pdf(x, self.p, self.q, self.log_beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_shape() {
        assert_eq!(BetaShape::new(0.0_f64, 1.0), Err(SpecialError::DomainError));
        assert_eq!(BetaShape::new(1.0_f64, -2.0), Err(SpecialError::DomainError));
        assert_eq!(BetaShape::new(f64::NAN, 1.0), Err(SpecialError::DomainError));
        assert_eq!(BetaShape::new(1.0, f64::INFINITY), Err(SpecialError::DomainError));
    }

    #[test]
    fn new_agrees_with_checked_functions() {
        use crate::special::betainc;
        let shapes = [
            (0.5_f64, 1.5),
            (0.0, 1.0),
            (-1.0, 2.0),
            (f64::NAN, 1.0),
            (1.0, f64::INFINITY),
            (1e-300, 1e300),
        ];
        for &(p, q) in &shapes {
            assert_eq!(
                BetaShape::new(p, q).is_ok(),
                betainc(p, q, 0.5).is_ok(),
                "p={p}, q={q}"
            );
        }
    }

    #[test]
    fn caches_log_beta() {
        let s = BetaShape::new(0.5_f64, 1.5).unwrap();
        assert_eq!(s.log_beta(), lbeta(0.5, 1.5));
        assert_eq!(s.p(), 0.5);
        assert_eq!(s.q(), 1.5);
    }

    #[test]
    fn delegates_to_free_functions() {
        let s = BetaShape::new(0.1_f64, 0.2).unwrap();
        let lb = lbeta(0.1, 0.2);
        for &x in &[0.0, 0.05, 0.5, 0.95, 1.0] {
            assert_eq!(s.inc_beta(x), inc_beta(x, 0.1, 0.2, lb));
            assert_eq!(s.inv_inc_beta(x), inv_inc_beta(x, 0.1, 0.2, lb));
        }
        assert_eq!(s.pdf(0.3), beta_pdf(0.3, 0.1, 0.2, lb));
    }

    #[test]
    fn swap_is_complementary() {
        let s = BetaShape::new(2.0_f64, 5.0).unwrap();
        let t = s.swap();
        assert_eq!(t.p(), 5.0);
        assert_eq!(t.q(), 2.0);
        for &x in &[0.1, 0.3, 0.6, 0.9] {
            let lhs = s.inc_beta(x);
            let rhs = 1.0 - t.inc_beta(1.0 - x);
            assert!((lhs - rhs).abs() < 1e-14, "x={x}: {lhs} vs {rhs}");
        }
    }

    #[test]
    fn settings_round_trip() {
        let s = BetaShape::new(3.0_f32, 4.0).unwrap();
        let r = s.inv_inc_beta_with(0.25, &InvSettings::default());
        assert!(r.converged);
        assert!((s.inc_beta(r.x) - 0.25).abs() < 1e-5);
    }
}
