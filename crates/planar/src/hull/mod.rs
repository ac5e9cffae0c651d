//! Convex hulls of planar point sets.
//!
//! Purpose
//! - Two independent constructions with one canonical output: counter-clockwise,
//!   starting at the lowest-y (then lowest-x) point, no ε-collinear triples.
//! - `graham`: angular sort + stack, O(n log n).
//! - `jarvis`: gift wrapping, O(n h) for h hull vertices.
//!
//! Both reject inputs with fewer than three distinct points or with all points
//! on one line; collinear boundary points are dropped, never reported.
//!
//! Code cross-refs: `geom2::{orient, squared_distance, GeomCfg}`, `steps::Stepper`

mod graham;
mod jarvis;

use std::fmt;
use std::str::FromStr;

use crate::error::GeomError;
use crate::geom2::{is_finite_point, lex_cmp, orient, squared_distance, GeomCfg, Point};

pub use graham::{graham, graham_steps, Graham};
pub use jarvis::{jarvis, jarvis_steps, Jarvis};

/// Hull-so-far plus the point currently under test.
#[derive(Clone, Debug, PartialEq)]
pub struct HullSnapshot {
    pub hull: Vec<Point>,
    pub candidate: Option<Point>,
    pub done: bool,
}

/// Hull construction to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HullAlgorithm {
    #[default]
    Graham,
    Jarvis,
}

impl fmt::Display for HullAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullAlgorithm::Graham => f.write_str("graham"),
            HullAlgorithm::Jarvis => f.write_str("jarvis"),
        }
    }
}

impl FromStr for HullAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graham" => Ok(HullAlgorithm::Graham),
            "jarvis" => Ok(HullAlgorithm::Jarvis),
            other => Err(format!("unknown hull algorithm `{other}` (expected graham|jarvis)")),
        }
    }
}

/// Dispatch to the selected construction.
pub fn convex_hull(
    points: &[Point],
    algo: HullAlgorithm,
    cfg: GeomCfg,
) -> Result<Vec<Point>, GeomError> {
    match algo {
        HullAlgorithm::Graham => graham(points, cfg),
        HullAlgorithm::Jarvis => jarvis(points, cfg),
    }
}

/// Lowest y, ties broken by lowest x. `points` must be non-empty.
pub(crate) fn start_index(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.y < b.y || (p.y == b.y && p.x < b.x) {
            best = i;
        }
    }
    best
}

/// Shared input checks: finite coordinates, ≥ 3 distinct points, not all
/// collinear within `eps`. Returns the start index on success.
pub(crate) fn validate(points: &[Point], eps: f64) -> Result<usize, GeomError> {
    if !points.iter().all(is_finite_point) {
        return Err(GeomError::NonFinite);
    }
    let mut distinct = points.to_vec();
    distinct.sort_by(lex_cmp);
    distinct.dedup();
    if distinct.len() < 3 {
        return Err(GeomError::TooFewPoints {
            distinct: distinct.len(),
        });
    }
    let i0 = start_index(points);
    let p0 = points[i0];
    let far = points
        .iter()
        .copied()
        .max_by(|a, b| squared_distance(p0, *a).total_cmp(&squared_distance(p0, *b)))
        .unwrap_or(p0);
    if points.iter().all(|&p| orient(p0, far, p).abs() <= eps) {
        return Err(GeomError::Collinear {
            count: points.len(),
        });
    }
    Ok(i0)
}
