use thiserror::Error;

/// Errors returned when a geometric precondition does not hold.
///
/// A ray missing a box is not an error, it is reported as a missing
/// [`Reflection`](crate::geometry::Reflection) or a non-positive cast distance.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// A vector with an epsilon-zero length cannot be normalized.
    #[error("cannot normalize a vector of zero length")]
    ZeroLengthVector,

    /// The resolution power must be strictly positive for a traversal to terminate.
    #[error("resolution power must be positive, got {0}")]
    NonPositivePower(f64),

    /// The root shape of a traced tree has no extent.
    #[error("root shape must have a positive diagonal, got {0}")]
    DegenerateShape(f64),
}
