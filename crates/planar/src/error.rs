//! Error types shared by all algorithms.
//!
//! Three families:
//! - invalid input (degenerate points, segments, polygons), rejected before any work;
//! - precondition violations (e.g. triangulating a polygon that is not y-monotone);
//! - numerical breakdown of an otherwise valid computation.
//!
//! Ordinary numerical degeneracy (collinear triples, parallel lines,
//! near-duplicate intersection points) is resolved by tolerances and never
//! surfaces here.

use thiserror::Error;

/// Broad category of a [`GeomError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Precondition,
    Numerical,
}

/// Failure of a single geometric computation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeomError {
    /// A coordinate is NaN or infinite.
    #[error("invalid input: non-finite coordinate")]
    NonFinite,

    /// Hull construction needs at least three distinct points.
    #[error("invalid input: hull needs at least 3 distinct points, got {distinct}")]
    TooFewPoints { distinct: usize },

    /// All input points lie on one line (within tolerance).
    #[error("invalid input: all {count} points are collinear")]
    Collinear { count: usize },

    /// A segment whose endpoints coincide.
    #[error("invalid input: segment {index} has coincident endpoints")]
    DegenerateSegment { index: usize },

    /// A polygon with fewer than three vertices.
    #[error("invalid input: polygon needs at least 3 vertices, got {len}")]
    PolygonTooSmall { len: usize },

    /// Vertex `index` equals its cyclic successor.
    #[error("invalid input: polygon vertex {index} repeats its successor")]
    RepeatedVertex { index: usize },

    /// The monotone triangulator was handed a polygon with split or merge vertices.
    #[error("precondition violated: polygon is not y-monotone ({split} split, {merge} merge vertices)")]
    NotMonotone { split: usize, merge: usize },

    /// Gift wrapping did not return to its start point within one round per input point.
    #[error("numerical failure: hull did not close after {rounds} rounds")]
    HullNotClosed { rounds: usize },
}

impl GeomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeomError::NotMonotone { .. } => ErrorKind::Precondition,
            GeomError::HullNotClosed { .. } => ErrorKind::Numerical,
            _ => ErrorKind::InvalidInput,
        }
    }
}
