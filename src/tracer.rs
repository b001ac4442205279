use crate::{
    geometry::{BoundingBox, Ray, Reflection, Scalar},
    tree::Tree,
    Error,
};

/// Number of octants a box is divided into.
pub const OCTANTS: usize = 8;

/// Octree bounded by an axis-aligned box, the tree type driven by the tracer.
pub type Octree<P, T> = Tree<P, OCTANTS, BoundingBox<T>>;

/// Result of casting a ray through an [`Octree`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cast<T, P> {
    /// Entry distance of the deepest node hit, [`Scalar::LOWEST`] if nothing was hit.
    pub dist: T,
    /// Ray reflected off the deepest node hit. Meaningless if nothing was hit.
    pub reflect_ray: Ray<T>,
    /// Payload of the deepest node hit. Default if nothing was hit.
    pub payload: P,
}

impl<T: Scalar, P> Cast<T, P> {
    /// Returns `true` if the ray hit at least the root of the tree.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.dist.is_above_zero()
    }

    #[inline]
    fn record(&mut self, reflection: Reflection<T>, payload: P) {
        self.dist = reflection.dist;
        self.reflect_ray = reflection.ray;
        self.payload = payload;
    }
}

/// Returns the octant of `shape` the ray enters through, if the ray hits `shape` and `shape` is
/// still larger than `power`.
#[inline]
fn select_octant<T: Scalar>(shape: &BoundingBox<T>, ray: &Ray<T>, power: T) -> Option<usize> {
    let reflection = shape.intersect(ray)?;
    descend(shape, &reflection, power)
}

#[inline]
fn descend<T: Scalar>(shape: &BoundingBox<T>, reflection: &Reflection<T>, power: T) -> Option<usize> {
    if shape.diagonal().is_less(power) {
        return None;
    }

    // Boxes a few ulps wide round back to themselves when halved.
    let index = shape.octant(&reflection.ray.origin);
    (shape.child(index) != *shape).then_some(index)
}

fn child_shape<T: Scalar>(index: usize, shape: &BoundingBox<T>) -> BoundingBox<T> {
    shape.child(index)
}

fn validate<P, T: Scalar>(tree: &Octree<P, T>, power: T) -> Result<(), Error> {
    if !power.is_above_zero() {
        #[cfg(feature = "tracing")]
        tracing::debug!(power = power.to_f64(), "rejected non-positive power");
        return Err(Error::NonPositivePower(power.to_f64()));
    }

    let diagonal = tree.shape().diagonal();
    if !diagonal.is_above_zero() {
        #[cfg(feature = "tracing")]
        tracing::debug!(diagonal = diagonal.to_f64(), "rejected degenerate root shape");
        return Err(Error::DegenerateShape(diagonal.to_f64()));
    }

    Ok(())
}

/// Creates the nodes of the tree the ray goes through.
///
/// Starting from the root, the child containing the entry point of the ray is created and the
/// process repeats in that child until the region's diagonal drops below `power`, or until the
/// region is too small to be halved at the precision of `T`. A single path is created per call.
///
/// # Errors
///
/// Returns [`Error::NonPositivePower`] if `power` is not positive and [`Error::DegenerateShape`] if
/// the root shape has no extent. The tree is left untouched in both cases.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, name = "tracer::build"))]
pub fn build_tree<P, T>(tree: &mut Octree<P, T>, ray: &Ray<T>, power: T) -> Result<(), Error>
where
    P: Default,
    T: Scalar,
{
    validate(tree, power)?;

    #[cfg(feature = "tracing")]
    let mut levels = 0usize;
    tree.insert_nodes(
        |shape: &BoundingBox<T>, (ray, power): &(Ray<T>, T)| {
            #[cfg(feature = "tracing")]
            {
                levels += 1;
            }
            select_octant(shape, ray, *power)
        },
        child_shape,
        (*ray, power),
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(levels, nodes = tree.len(), "built ray path");
    Ok(())
}

/// Removes the nodes of the tree the ray goes through.
///
/// At every node the ray hits, the child containing the entry point is removed along with its
/// subtree, and the remaining children are visited with the same rule.
///
/// # Errors
///
/// Same as [`build_tree`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, name = "tracer::burn"))]
pub fn burn_tree<P, T>(tree: &mut Octree<P, T>, ray: &Ray<T>, power: T) -> Result<(), Error>
where
    T: Scalar,
{
    validate(tree, power)?;

    #[cfg(feature = "tracing")]
    let mut levels = 0usize;
    tree.remove_nodes(
        |shape: &BoundingBox<T>, (ray, power): &(Ray<T>, T)| {
            #[cfg(feature = "tracing")]
            {
                levels += 1;
            }
            select_octant(shape, ray, *power)
        },
        child_shape,
        (*ray, power),
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(levels, nodes = tree.len(), "burnt ray path");
    Ok(())
}

/// Casts a ray through the existing nodes of the tree.
///
/// The ray follows the same path as [`build_tree`] would, and the returned [`Cast`] holds the
/// distance, reflected ray and payload of the deepest node hit along that path. Check
/// [`Cast::is_hit`] before using them.
///
/// # Errors
///
/// Same as [`build_tree`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, name = "tracer::cast"))]
pub fn cast_tree<P, T>(tree: &Octree<P, T>, ray: &Ray<T>, power: T) -> Result<Cast<T, P>, Error>
where
    P: Default + Clone,
    T: Scalar,
{
    validate(tree, power)?;

    let mut cast = Cast {
        dist: T::LOWEST,
        reflect_ray: *ray,
        payload: P::default(),
    };
    #[cfg(feature = "tracing")]
    let mut levels = 0usize;

    tree.visit_nodes(
        |payload: &P, shape: &BoundingBox<T>, (ray, power): &(Ray<T>, T)| {
            #[cfg(feature = "tracing")]
            {
                levels += 1;
            }
            let reflection = shape.intersect(ray)?;
            cast.record(reflection, payload.clone());
            descend(shape, &reflection, *power)
        },
        child_shape,
        (*ray, power),
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(levels, hit = cast.is_hit(), "cast ray");
    Ok(cast)
}

/// Trait to build, burn and cast rays through an [`Octree`].
pub trait RayTrace<T> {
    /// Payload stored in the nodes of the tree.
    type Payload;

    /// Creates the nodes the ray goes through.
    ///
    /// Refer to [`build_tree`] for more information.
    fn build(&mut self, ray: &Ray<T>, power: T) -> Result<(), Error>;

    /// Removes the nodes the ray goes through.
    ///
    /// Refer to [`burn_tree`] for more information.
    fn burn(&mut self, ray: &Ray<T>, power: T) -> Result<(), Error>;

    /// Returns the deepest node hit by the ray.
    ///
    /// Refer to [`cast_tree`] for more information.
    fn cast(&self, ray: &Ray<T>, power: T) -> Result<Cast<T, Self::Payload>, Error>;
}

impl<P, T> RayTrace<T> for Octree<P, T>
where
    P: Default + Clone,
    T: Scalar,
{
    type Payload = P;

    #[inline]
    fn build(&mut self, ray: &Ray<T>, power: T) -> Result<(), Error> {
        build_tree(self, ray, power)
    }

    #[inline]
    fn burn(&mut self, ray: &Ray<T>, power: T) -> Result<(), Error> {
        burn_tree(self, ray, power)
    }

    #[inline]
    fn cast(&self, ray: &Ray<T>, power: T) -> Result<Cast<T, P>, Error> {
        cast_tree(self, ray, power)
    }
}
