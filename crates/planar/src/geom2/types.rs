//! Basic 2D value types and tolerances.
//!
//! - `GeomCfg`: centralizes the orientation epsilon and the rounding precision
//!   used to deduplicate intersection points.
//! - `Segment`: two distinct endpoints, unordered.
//! - `Polygon`: cyclic vertex list with modular access.
//! - `Restriction`: admissible parameter range of a parametrized line.
//!
//! Code cross-refs: `predicates::{orient, intersection}`

use nalgebra::Vector2;

use crate::error::GeomError;

use super::predicates::{intersection, lex_cmp, orient};

/// A point in the plane. Coordinates are finite once validated.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Orientation tolerance: `|orient| <= eps` counts as collinear.
    pub eps: f64,
    /// Decimal digits kept when deduplicating intersection points.
    pub round_digits: u32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            round_digits: 15,
        }
    }
}

/// Parameter range constraint for one line in `intersection`.
///
/// A line through `p, q` is parametrized as `p + t (q - p)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Restriction {
    /// Any `t`.
    #[default]
    Line,
    /// `0 <= t <= 1`.
    Segment,
    /// `t >= 0` (ray starting at the first point).
    Ray,
    /// `t <= 1` (ray starting at the second point).
    RayInverse,
}

impl Restriction {
    #[inline]
    pub fn admits(self, t: f64) -> bool {
        let lower_ok = !matches!(self, Restriction::Segment | Restriction::Ray) || t >= 0.0;
        let upper_ok = !matches!(self, Restriction::Segment | Restriction::RayInverse) || t <= 1.0;
        lower_ok && upper_ok
    }
}

#[inline]
pub(crate) fn is_finite_point(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Line segment between two distinct points.
///
/// Only the validating constructors build one, so the endpoints are always
/// finite and distinct:
///
/// ```compile_fail
/// use planar::geom2::{Point, Segment};
/// let p = Point::new(1.0, 1.0);
/// let s = Segment { a: p, b: p };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Validated constructor: finite coordinates, distinct endpoints.
    pub fn new(a: Point, b: Point) -> Result<Self, GeomError> {
        Self::with_index(a, b, 0)
    }

    pub(crate) fn with_index(a: Point, b: Point, index: usize) -> Result<Self, GeomError> {
        if !is_finite_point(&a) || !is_finite_point(&b) {
            return Err(GeomError::NonFinite);
        }
        if a == b {
            return Err(GeomError::DegenerateSegment { index });
        }
        Ok(Self { a, b })
    }

    /// First endpoint as given.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Second endpoint as given.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Endpoint that comes first in (x, y) order; sweep begins here.
    #[inline]
    pub fn lower(&self) -> Point {
        if lex_cmp(&self.a, &self.b).is_le() {
            self.a
        } else {
            self.b
        }
    }

    #[inline]
    pub fn upper(&self) -> Point {
        if lex_cmp(&self.a, &self.b).is_le() {
            self.b
        } else {
            self.a
        }
    }

    #[inline]
    pub fn has_endpoint(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }

    /// Segment/segment intersection point, if any.
    #[inline]
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        intersection(
            self.a,
            self.b,
            other.a,
            other.b,
            Restriction::Segment,
            Restriction::Segment,
        )
    }

    /// y where the segment meets the vertical line at `x`.
    ///
    /// Vertical segments report their lower endpoint's y.
    pub fn y_at(&self, x: f64) -> f64 {
        let lo = self.lower();
        let hi = self.upper();
        let dx = hi.x - lo.x;
        if dx == 0.0 {
            return lo.y;
        }
        let t = ((x - lo.x) / dx).clamp(0.0, 1.0);
        lo.y + t * (hi.y - lo.y)
    }
}

/// Build validated segments from raw coordinate pairs.
///
/// The error names the offending input index.
pub fn segments_from_coords(raw: &[[[f64; 2]; 2]]) -> Result<Vec<Segment>, GeomError> {
    raw.iter()
        .enumerate()
        .map(|(i, [a, b])| {
            Segment::with_index(Vector2::new(a[0], a[1]), Vector2::new(b[0], b[1]), i)
        })
        .collect()
}

/// Simple closed polygon as a cyclic vertex list.
///
/// Invariants:
/// - at least three vertices, all finite;
/// - no vertex equals its cyclic successor.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeomError> {
        if vertices.len() < 3 {
            return Err(GeomError::PolygonTooSmall {
                len: vertices.len(),
            });
        }
        if !vertices.iter().all(is_finite_point) {
            return Err(GeomError::NonFinite);
        }
        let n = vertices.len();
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(GeomError::RepeatedVertex { index: i });
            }
        }
        Ok(Self { vertices })
    }

    pub fn from_coords(raw: &[[f64; 2]]) -> Result<Self, GeomError> {
        Self::new(raw.iter().map(|p| Vector2::new(p[0], p[1])).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Cyclic index normalization; negative indices count from the end.
    #[inline]
    pub fn wrap(&self, i: isize) -> usize {
        i.rem_euclid(self.vertices.len() as isize) as usize
    }

    /// Vertex at cyclic index `i` (`-1` is the last vertex).
    #[inline]
    pub fn vertex(&self, i: isize) -> Point {
        self.vertices[self.wrap(i)]
    }

    #[inline]
    pub fn prev_index(&self, i: usize) -> usize {
        (i + self.vertices.len() - 1) % self.vertices.len()
    }

    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    /// True when `i` and `j` are equal or neighbors along the boundary.
    #[inline]
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        i == j || self.next_index(i) == j || self.prev_index(i) == j
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let origin = self.vertices[0];
        let mut twice = 0.0;
        for i in 1..n - 1 {
            twice += orient(origin, self.vertices[i], self.vertices[i + 1]);
        }
        0.5 * twice
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Same polygon with counter-clockwise vertex order.
    pub fn to_ccw(&self) -> Polygon {
        if self.is_ccw() {
            return self.clone();
        }
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polygon { vertices }
    }
}
