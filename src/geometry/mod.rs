/// Conversions from and to vector types of other math libraries.
mod impls;
/// Rays and axis-aligned bounding boxes.
pub mod shape;
/// Three dimensional vector type.
pub mod vector;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use shape::*;
pub use vector::*;

/// Floating point scalar used by the geometry kernel.
///
/// Comparisons are tolerant to rounding errors: two values are considered equal if their
/// difference is at most `max(ε, ε·max(|a|, |b|))` where `ε` is [`Scalar::EPSILON`] of the type
/// itself.
///
/// The sign predicates are named [`Scalar::is_above_zero`] and [`Scalar::is_below_zero`] so that
/// no inherent float method can take precedence over them.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// The value `2`.
    const TWO: Self;
    /// Machine epsilon of the type.
    const EPSILON: Self;
    /// Lowest finite value of the type, used as the "no intersection" distance.
    const LOWEST: Self;
    /// Largest finite value of the type.
    const MAX: Self;

    /// Returns the absolute value.
    fn abs(self) -> Self;

    /// Returns the square root.
    fn sqrt(self) -> Self;

    /// Returns the minimum between two numbers.
    fn min(self, rhs: Self) -> Self;

    /// Returns the maximum between two numbers.
    fn max(self, rhs: Self) -> Self;

    /// Lossy conversion used for error reporting.
    fn to_f64(self) -> f64;

    /// Returns half of the value.
    #[inline]
    fn half(self) -> Self {
        self / Self::TWO
    }

    /// Returns the comparison tolerance between `self` and `rhs`.
    #[inline]
    fn tolerance(self, rhs: Self) -> Self {
        Self::EPSILON.max(Self::EPSILON * self.abs().max(rhs.abs()))
    }

    /// Returns `true` if the value is within epsilon of zero.
    #[inline]
    fn is_zero(self) -> bool {
        self.abs() <= Self::EPSILON
    }

    /// Returns `true` if the value is greater than epsilon.
    #[inline]
    fn is_above_zero(self) -> bool {
        self > Self::EPSILON
    }

    /// Returns `true` if the value is lower than minus epsilon.
    #[inline]
    fn is_below_zero(self) -> bool {
        self < -Self::EPSILON
    }

    /// Returns `true` if both values are equal within tolerance.
    #[inline]
    fn is_equal(self, rhs: Self) -> bool {
        (self - rhs).abs() <= self.tolerance(rhs)
    }

    /// Returns `true` if `self` is greater than `rhs` by more than the tolerance.
    #[inline]
    fn is_more(self, rhs: Self) -> bool {
        self - rhs > self.tolerance(rhs)
    }

    /// Returns `true` if `self` is lower than `rhs` by more than the tolerance.
    #[inline]
    fn is_less(self, rhs: Self) -> bool {
        self - rhs < -self.tolerance(rhs)
    }

    /// Returns `true` if the value lies in `[low, high]`, boundaries within tolerance included.
    #[inline]
    fn in_range(self, low: Self, high: Self) -> bool {
        !self.is_less(low) && !self.is_more(high)
    }
}

macro_rules! impl_floats {
    ($s: ty) => {
        impl Scalar for $s {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const EPSILON: Self = <$s>::EPSILON;
            const LOWEST: Self = <$s>::MIN;
            const MAX: Self = <$s>::MAX;

            #[inline]
            fn abs(self) -> Self {
                self.abs()
            }

            #[inline]
            fn sqrt(self) -> Self {
                self.sqrt()
            }

            #[inline]
            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            #[inline]
            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_floats!(f32);
impl_floats!(f64);

/// Intersects a ray with a pair of opposite faces perpendicular to one axis.
///
/// `alpha` is the component of the ray direction along the axis, `a` and `b` the signed distances
/// from the ray origin to the lower and upper face. Returns the ray parameters of both
/// intersections in ascending order, or twice [`Scalar::LOWEST`] if the ray is parallel to the
/// faces.
#[inline]
pub fn ray_faces_intersection<T: Scalar>(alpha: T, a: T, b: T) -> (T, T) {
    if alpha.is_above_zero() {
        (a / alpha, b / alpha)
    } else if alpha.is_below_zero() {
        (b / alpha, a / alpha)
    } else {
        (T::LOWEST, T::LOWEST)
    }
}
