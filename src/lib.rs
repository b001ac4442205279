//! # Raytree
//!
//! Raytree is a crate providing sparse spatial trees that are grown, carved and queried by casting
//! rays through them.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide a small, generic core for ray driven volumes: a tree
//! with a fixed number of children per node whose regions are never stored but derived from the
//! root shape on every traversal. On top of it, the [`tracer`] drives an octree bounded by an
//! axis-aligned box, creating, removing or reading nodes along the path of a ray until regions
//! become smaller than a given resolution `power`.
//!
//! Geometry is generic over [`f32`] and [`f64`] through the [`Scalar`](geometry::Scalar) trait.
//! Enable the "glam" or "nalgebra" features to convert vectors from and to those libraries.
//! Enable the "tracing" feature to get spans and events from the tracer through
//! [tracing](https://github.com/tokio-rs/tracing).
//!
//! # Using Raytree
//!
//! ## Creating a tree
//!
//! An [`Octree`](tracer::Octree) only needs the box bounding the whole volume:
//!
//! ```
//! # use raytree::prelude::*;
//! #
//! let shape = BoundingBox::new(Vector3::ZERO, Vector3::splat(1.0));
//! let mut tree = Octree::<u32, f32>::new(shape);
//!
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! ## Building, casting and burning
//!
//! Rays create nodes with [`build`](tracer::RayTrace::build), read them back with
//! [`cast`](tracer::RayTrace::cast) and remove them with [`burn`](tracer::RayTrace::burn):
//!
//! ```
//! # use raytree::prelude::*;
//! #
//! # let shape = BoundingBox::new(Vector3::ZERO, Vector3::splat(1.0));
//! # let mut tree = Octree::<u32, f32>::new(shape);
//! let ray = Ray::new(Vector3::new(0.3, 0.6, -1.0), Vector3::new(0.0, 0.0, 1.0));
//! let power = 0.1;
//!
//! tree.build(&ray, power)?;
//! assert_eq!(tree.depth(), 6);
//!
//! let cast = tree.cast(&ray, power)?;
//! assert!(cast.is_hit());
//! assert_eq!(cast.payload, 0);
//!
//! tree.burn(&ray, power)?;
//! assert_eq!(tree.len(), 1);
//! # Ok::<(), raytree::Error>(())
//! ```
//!
//! Lower level traversals are available on [`Tree`](tree::Tree) itself for custom selection
//! rules, for example to write payloads along a path.

#![warn(missing_docs)]

/// Errors returned by the crate.
pub mod error;

/// Scalars, vectors, rays and bounding boxes.
pub mod geometry;

/// Ray driven operations on octrees.
pub mod tracer;

/// Generic tree and its selective traversals.
pub mod tree;

pub use error::Error;

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::geometry::{BoundingBox, Ray, Reflection, Scalar, Vector3};
    pub use crate::tracer::{Cast, Octree, RayTrace};
    pub use crate::tree::{Node, Tree};
}
