//! 2D primitives: value types, tolerances and predicates.
//!
//! Purpose
//! - Provide the point/segment/polygon value types every algorithm consumes,
//!   with validation at construction so algorithms can assume clean input.
//! - Keep predicates tolerance-free; the epsilon lives in `GeomCfg` and is
//!   applied by callers.
//!
//! Code cross-refs: `hull`, `sweep`, `monotone`

mod predicates;
mod types;

pub use predicates::{
    intersection, lex_cmp, orient, parametric_intersection, round_point, round_to,
    squared_distance,
};
pub use types::{segments_from_coords, GeomCfg, Point, Polygon, Restriction, Segment};

pub(crate) use types::is_finite_point;

#[cfg(test)]
mod tests;
