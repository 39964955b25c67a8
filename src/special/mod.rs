//! Beta-family special functions.
//!
//! Provides log-beta, the regularized incomplete beta function, and its
//! inverse in x. All functions are generic over [`FloatScalar`] (f32/f64),
//! no-std compatible, and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`lbeta`] | Log-beta ln B(p,q) |
//! | [`beta`] | Beta function B(p,q) = Γ(p)Γ(q)/Γ(p+q) |
//! | [`beta_pdf`] | Beta density x^{p−1}(1−x)^{q−1}/B(p,q) |
//! | [`ln_beta_pdf`] | Log of the Beta density |
//! | [`inc_beta`] | Regularized incomplete beta I_x(p,q), caller supplies ln B |
//! | [`inv_inc_beta`] | Inverse of I_x(p,q) in x, caller supplies ln B |
//! | [`inv_inc_beta_with`] | Inverse with explicit [`InvSettings`], returns an [`Inversion`] report |
//! | [`betainc`] | Checked I_x(p,q), computes ln B itself |
//! | [`betaincinv`] | Checked inverse, computes ln B itself |
//!
//! The unchecked functions take ln B(p,q) as an argument so that repeated
//! calls with a fixed shape do not recompute it. The value must come from
//! [`lbeta`] for the same (p, q); [`BetaShape`](crate::BetaShape) keeps the
//! two together.
//!
//! # Example
//!
//! ```
//! use incbeta::special::{lbeta, inc_beta, inv_inc_beta};
//!
//! let lb = lbeta(2.0_f64, 3.0);
//!
//! // I_{0.5}(2, 3) = 11/16
//! let y = inc_beta(0.5, 2.0, 3.0, lb);
//! assert!((y - 0.6875).abs() < 1e-15);
//!
//! // and back again
//! let x = inv_inc_beta(y, 2.0, 3.0, lb);
//! assert!((x - 0.5).abs() < 1e-14);
//! ```

use core::fmt;

use crate::FloatScalar;

mod beta_fn;
mod betainc;
mod betaincinv;


pub use beta_fn::{beta, beta_pdf, lbeta, ln_beta_pdf};
pub use betainc::{betainc, inc_beta};
pub use betaincinv::{betaincinv, inv_inc_beta, inv_inc_beta_with, InvSettings, Inversion};

/// Errors from the checked special function entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Input outside the function's domain (e.g. p ≤ 0 or x ∉ [0, 1]).
    DomainError,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainError => write!(f, "input outside function domain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

/// Validate shape parameters: both finite and > 0.
pub(crate) fn check_shape<T: FloatScalar>(p: T, q: T) -> Result<(), SpecialError> {
    let zero = T::zero();
    // Negated comparisons so that NaN is rejected too.
    if !(p > zero && q > zero) || !(p.is_finite() && q.is_finite()) {
        return Err(SpecialError::DomainError);
    }
    Ok(())
}

/// Validate shape parameters and a probability-like argument in [0, 1].
pub(crate) fn check_domain<T: FloatScalar>(p: T, q: T, x: T) -> Result<(), SpecialError> {
    check_shape(p, q)?;
    if !(x >= T::zero() && x <= T::one()) {
        return Err(SpecialError::DomainError);
    }
    Ok(())
}
