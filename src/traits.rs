use core::fmt::Debug;
use num_traits::Float;

/// Trait for the floating-point types the special functions are generic over.
///
/// Implemented for `f32` and `f64`. On top of [`Float`] it supplies the
/// log-gamma primitive, which `num-traits` does not provide, and a lossless
/// (for `f64`) conversion for the literal constants used by the algorithms.
pub trait FloatScalar: Float + Debug {
    /// Natural logarithm of |Γ(self)|.
    fn ln_gamma(self) -> Self;

    /// Convert an `f64` constant into `Self`, rounding to nearest for `f32`.
    fn cst(v: f64) -> Self;
}

/// Concrete impls backed by the `libm` log-gamma routines.
macro_rules! impl_float_scalar {
    ($($t:ty => $lgamma:path),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn ln_gamma(self) -> $t { $lgamma(self) }
                #[inline] fn cst(v: f64) -> $t { v as $t }
            }
        )*
    };
}

impl_float_scalar!(f32 => libm::lgammaf, f64 => libm::lgamma);
