//! Vertex classification and the y-monotonicity test.

use std::cmp::Ordering;

use crate::geom2::{orient, Point, Polygon};

/// Role of a vertex relative to a horizontal sweep line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexClass {
    /// Both neighbors below, interior angle convex.
    Start,
    /// Both neighbors above, interior angle convex.
    End,
    /// Both neighbors below, reflex.
    Split,
    /// Both neighbors above, reflex.
    Merge,
    /// One neighbor above, one below.
    Regular,
}

/// Sweep order: `p` is above `q` if it has larger y, or equal y and smaller x.
#[inline]
pub fn vertical_cmp(p: &Point, q: &Point) -> Ordering {
    p.y.total_cmp(&q.y).then(q.x.total_cmp(&p.x))
}

#[inline]
pub(crate) fn above(p: &Point, q: &Point) -> bool {
    vertical_cmp(p, q).is_gt()
}

/// Classify `b` given its predecessor `a` and successor `c` (CCW order).
pub fn classify_vertex(a: Point, b: Point, c: Point) -> VertexClass {
    let convex = orient(a, b, c) > 0.0;
    if above(&b, &a) && above(&b, &c) {
        if convex {
            VertexClass::Start
        } else {
            VertexClass::Split
        }
    } else if above(&a, &b) && above(&c, &b) {
        if convex {
            VertexClass::End
        } else {
            VertexClass::Merge
        }
    } else {
        VertexClass::Regular
    }
}

/// Per-vertex classes of a polygon, indexed like its vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub classes: Vec<VertexClass>,
}

impl Classification {
    /// Vertex indices with class `class`, ascending.
    pub fn indices(&self, class: VertexClass) -> Vec<usize> {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == class)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count(&self, class: VertexClass) -> usize {
        self.classes.iter().filter(|c| **c == class).count()
    }

    pub fn is_y_monotone(&self) -> bool {
        self.count(VertexClass::Split) == 0 && self.count(VertexClass::Merge) == 0
    }
}

/// Classify every vertex; the polygon is assumed counter-clockwise.
pub fn classify_poly(poly: &Polygon) -> Classification {
    let classes = (0..poly.len())
        .map(|i| {
            let i = i as isize;
            classify_vertex(poly.vertex(i - 1), poly.vertex(i), poly.vertex(i + 1))
        })
        .collect();
    Classification { classes }
}

/// True when the polygon has no split and no merge vertex.
pub fn is_y_monotone(poly: &Polygon) -> bool {
    classify_poly(poly).is_y_monotone()
}
