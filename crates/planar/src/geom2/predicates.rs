//! Orientation, distance and line-intersection predicates.
//!
//! None of these apply a tolerance; callers compare against `GeomCfg::eps`.

use std::cmp::Ordering;

use nalgebra::{Matrix2, Vector2};

use super::types::{Point, Restriction};

/// Twice the signed area of triangle (a, b, c).
///
/// Positive if `c` lies left of the directed line a→b, negative if right,
/// zero if collinear.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
pub fn squared_distance(a: Point, b: Point) -> f64 {
    (b - a).norm_squared()
}

/// Total (x, y) order.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Parameters `(t1, t2)` where line (p1,p2) meets line (p3,p4).
///
/// The meeting point is `p1 + t1 (p2 - p1) = p3 + t2 (p4 - p3)`.
/// Returns None when the determinant is exactly zero (parallel or coincident).
pub fn parametric_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<(f64, f64)> {
    // Columns: d1 and -d2; solve [d1 -d2] (t1, t2)^T = p3 - p1.
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let m = Matrix2::from_columns(&[d1, -d2]);
    let det = m.determinant();
    if det == 0.0 {
        return None;
    }
    let rhs = p3 - p1;
    // Cramer's rule.
    let t1 = (rhs.x * -d2.y - (-d2.x) * rhs.y) / det;
    let t2 = (d1.x * rhs.y - d1.y * rhs.x) / det;
    Some((t1, t2))
}

/// Intersection point of two restricted lines.
///
/// The point is computed from the parametrization of line 1.
pub fn intersection(
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
    restriction1: Restriction,
    restriction2: Restriction,
) -> Option<Point> {
    let (t1, t2) = parametric_intersection(p1, p2, p3, p4)?;
    if !restriction1.admits(t1) || !restriction2.admits(t2) {
        return None;
    }
    Some(p1 + (p2 - p1) * t1)
}

/// Round to `digits` decimals; values whose scaled form overflows pass through.
#[inline]
pub fn round_to(v: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    let r = scaled.round() / scale;
    if !r.is_finite() {
        return v;
    }
    // -0.0 and 0.0 must collapse to one dedup key.
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[inline]
pub fn round_point(p: Point, digits: u32) -> Point {
    Vector2::new(round_to(p.x, digits), round_to(p.y, digits))
}
