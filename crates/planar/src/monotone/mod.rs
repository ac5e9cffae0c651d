//! Monotone polygons: vertex classification, chain decomposition, triangulation.
//!
//! Purpose
//! - Classify polygon vertices (Start/End/Split/Merge/Regular) against a
//!   horizontal sweep line and decide y-monotonicity.
//! - Split a y-monotone polygon into left and right chains between its Start
//!   (top) and End (bottom) vertex.
//! - Triangulate it with a top-down sweep over both chains.
//!
//! Conventions
//! - Polygons are counter-clockwise (`Polygon::to_ccw` normalizes).
//! - "Above" means larger y, ties broken by smaller x, so horizontal edges get
//!   a deterministic direction and every vertex receives exactly one class.
//! - Decomposing arbitrary simple polygons into monotone pieces is not
//!   provided; the triangulator rejects non-monotone input.
//!
//! Code cross-refs: `geom2::{orient, Polygon}`, `steps::Stepper`

mod chains;
mod classify;
mod triangulate;

pub use chains::{two_chains, Chains, Side};
pub use classify::{
    classify_poly, classify_vertex, is_y_monotone, vertical_cmp, Classification, VertexClass,
};
pub use triangulate::{
    triangulate_monotone, triangulation_steps, MonotoneTriangulator, Triangulation,
    TriangulationSnapshot,
};

#[cfg(test)]
mod tests;
