use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, MulAssign, SubAssign};
use std::str::FromStr;

/// Coefficients with magnitude below this are treated as zero when formatting
pub const ZERO_THRESHOLD: f64 = 1e-9;

/// A trait comprising all operations required for polynomial coefficients
/// in dense_poly.
///
/// This aggregates `num_traits::Float` (arithmetic, `abs`, zero/one),
/// conversion from `f64` for thresholds, `FromStr` for the token reader
/// and `Display` for formatting. Implemented for `f32` and `f64`.
pub trait MathScalar:
    Float
    + FromPrimitive
    + ToPrimitive
    + FromStr
    + Debug
    + Display
    + Default
    + AddAssign
    + SubAssign
    + MulAssign
    + Send
    + Sync
    + 'static
{
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where
    T: Float
        + FromPrimitive
        + ToPrimitive
        + FromStr
        + Debug
        + Display
        + Default
        + AddAssign
        + SubAssign
        + MulAssign
        + Send
        + Sync
        + 'static
{
}

/// Convert an `f64` threshold into the scalar type
///
/// Falls back to the scalar's epsilon if the value is not representable.
#[inline]
pub(crate) fn threshold<T: MathScalar>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::epsilon)
}

/// Check if a coefficient is negligible under the given threshold
#[inline]
pub(crate) fn is_negligible<T: MathScalar>(n: T, limit: T) -> bool {
    n.abs() < limit
}
