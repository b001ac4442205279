use crate::geometry::{ray_faces_intersection, Scalar, Vector3};

/// Ray in 3D space.
///
/// The direction does not need to be normalized for intersections, only for the distances they
/// return to be expressed in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray<T> {
    /// Starting point of the ray.
    pub origin: Vector3<T>,
    /// Direction of the ray.
    pub direction: Vector3<T>,
}

impl<T> Ray<T> {
    /// Creates a new [`Ray`] with the given origin and direction.
    #[inline]
    pub const fn new(origin: Vector3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }
}

impl<T: Scalar> Ray<T> {
    /// Returns the point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: T) -> Vector3<T> {
        self.origin + self.direction * t
    }

    /// Returns `true` if both origin and direction are equal within tolerance.
    #[inline]
    pub fn is_equal(&self, rhs: &Self) -> bool {
        self.origin.is_equal(rhs.origin) && self.direction.is_equal(rhs.direction)
    }
}

/// Successful intersection of a ray with a [`BoundingBox`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflection<T> {
    /// Ray parameter of the entry point.
    pub dist: T,
    /// Ray starting at the entry point, mirrored off the face it entered through.
    pub ray: Ray<T>,
}

/// An axis-aligned bounding box.
///
/// All operations assume `min <= max` on every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox<T> {
    /// Minimum corner of the box.
    pub min: Vector3<T>,
    /// Maximum corner of the box.
    pub max: Vector3<T>,
}

impl<T> BoundingBox<T> {
    /// Creates a new [`BoundingBox`] with the given min and max corners.
    #[inline]
    pub const fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        Self { min, max }
    }
}

impl<T: Scalar> BoundingBox<T> {
    /// Returns the size of the [`BoundingBox`] along every axis.
    #[inline]
    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Returns half of the size of the [`BoundingBox`].
    #[inline]
    pub fn half(&self) -> Vector3<T> {
        let size = self.size();
        Vector3::new(size.x.half(), size.y.half(), size.z.half())
    }

    /// Returns the center of the [`BoundingBox`].
    #[inline]
    pub fn center(&self) -> Vector3<T> {
        self.min + self.half()
    }

    /// Returns the length of the diagonal, the characteristic size of the box.
    #[inline]
    pub fn diagonal(&self) -> T {
        self.size().length()
    }

    /// Returns `true` if the point lies inside the box, boundaries within tolerance included.
    #[inline]
    pub fn contains(&self, point: &Vector3<T>) -> bool {
        point.x.in_range(self.min.x, self.max.x)
            && point.y.in_range(self.min.y, self.max.y)
            && point.z.in_range(self.min.z, self.max.z)
    }

    /// Returns the octant of the box with the given index.
    ///
    /// Bit 0 of the index selects the upper half along x, bit 1 along y and bit 2 along z.
    #[inline]
    pub fn child(&self, index: usize) -> Self {
        let half = self.half().to_array();
        let mut min = self.min.to_array();
        let mut max = self.max.to_array();

        for axis in 0..3 {
            if index & (1 << axis) != 0 {
                min[axis] = min[axis] + half[axis];
            } else {
                max[axis] = max[axis] - half[axis];
            }
        }

        Self::new(min.into(), max.into())
    }

    /// Subdivides this [`BoundingBox`] into its 8 octants, ordered by index.
    #[inline]
    pub fn subdivide(&self) -> [Self; 8] {
        std::array::from_fn(|index| self.child(index))
    }

    /// Returns the index of the octant containing the given point.
    ///
    /// A coordinate on a half-plane within tolerance falls in the lower half.
    #[inline]
    pub fn octant(&self, point: &Vector3<T>) -> usize {
        let center = self.center().to_array();
        let point = point.to_array();

        (0..3).fold(0, |index, axis| {
            index | (usize::from(point[axis].is_more(center[axis])) << axis)
        })
    }

    /// Intersects a ray with the box using the slab method.
    ///
    /// Returns `None` if the ray misses the box or only touches it at or behind its origin.
    /// Otherwise returns the entry distance along with the ray reflected off the entry face; if
    /// several faces are entered at once, the lowest axis is the one mirrored.
    pub fn intersect(&self, ray: &Ray<T>) -> Option<Reflection<T>> {
        let origin = ray.origin.to_array();
        let mut direction = ray.direction.to_array();
        let min = self.min.to_array();
        let max = self.max.to_array();

        let mut entry: Option<(usize, T)> = None;
        let mut exit = T::MAX;

        for axis in 0..3 {
            if direction[axis].is_zero() {
                // Parallel to both faces, only constrains the origin.
                if !origin[axis].in_range(min[axis], max[axis]) {
                    return None;
                }
                continue;
            }

            let (near, far) = ray_faces_intersection(
                direction[axis],
                min[axis] - origin[axis],
                max[axis] - origin[axis],
            );

            if entry.map_or(true, |(_, dist)| near.is_more(dist)) {
                entry = Some((axis, near));
            }
            exit = exit.min(far);
        }

        let (axis, dist) = entry?;
        if !dist.is_above_zero() || dist.is_more(exit) {
            return None;
        }

        direction[axis] = -direction[axis];

        Some(Reflection {
            dist,
            ray: Ray::new(ray.at(dist), direction.into()),
        })
    }
}
