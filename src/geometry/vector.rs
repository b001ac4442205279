use crate::{geometry::Scalar, Error};
use std::ops::{Add, Mul, Neg, Sub};

/// Vector in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// Component along the x axis.
    pub x: T,
    /// Component along the y axis.
    pub y: T,
    /// Component along the z axis.
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new [`Vector3`] from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    /// All components set to zero.
    pub const ZERO: Self = Self::splat(T::ZERO);

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Returns the components as an array, indexed by axis.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiplies every component by `scalar`.
    #[inline]
    pub fn scale(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product of two vectors.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean norm of the vector.
    #[inline]
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }

    /// Returns the vector divided by its length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLengthVector`] if the length is within epsilon of zero.
    #[inline]
    pub fn normalize(self) -> Result<Self, Error> {
        let length = self.length();
        if length.is_zero() {
            return Err(Error::ZeroLengthVector);
        }

        Ok(Self::new(self.x / length, self.y / length, self.z / length))
    }

    /// Returns `true` if all components are equal within tolerance.
    #[inline]
    pub fn is_equal(self, rhs: Self) -> bool {
        self.x.is_equal(rhs.x) && self.y.is_equal(rhs.y) && self.z.is_equal(rhs.z)
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}
