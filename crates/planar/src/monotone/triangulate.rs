//! Two-chain sweep triangulation of a y-monotone polygon.

use crate::error::GeomError;
use crate::geom2::{orient, GeomCfg, Point, Polygon};
use crate::steps::{run_to_end, Stepper, Steps};

use super::chains::{two_chains, Side};
use super::classify::above;

/// Diagonals and triangles as vertex indices of the input polygon.
///
/// For n vertices: n − 3 diagonals, n − 2 triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub diagonals: Vec<(usize, usize)>,
    pub triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    /// Diagonals as point pairs of `poly`.
    pub fn diagonal_points(&self, poly: &Polygon) -> Vec<(Point, Point)> {
        let v = poly.vertices();
        self.diagonals.iter().map(|&(a, b)| (v[a], v[b])).collect()
    }
}

/// Sweep height, diagonals so far and the visible vertices (stack, bottom first).
#[derive(Clone, Debug, PartialEq)]
pub struct TriangulationSnapshot {
    pub sweep_y: f64,
    pub diagonals: Vec<(usize, usize)>,
    pub visible: Vec<usize>,
}

/// Sweep state.
///
/// `visible` holds the vertices already swept that can still see the area
/// below the sweep line. Between events they form a reflex chain on one side
/// topped by the most recent vertex.
#[derive(Clone, Debug)]
pub struct MonotoneTriangulator {
    eps: f64,
    points: Vec<Point>,
    order: Vec<usize>,
    sides: Vec<Side>,
    visible: Vec<usize>,
    next: usize,
    closed: bool,
    out: Triangulation,
}

impl MonotoneTriangulator {
    /// Fails with `NotMonotone` (nothing is triangulated) for non-monotone input.
    pub fn new(poly: &Polygon, cfg: GeomCfg) -> Result<Self, GeomError> {
        let chains = two_chains(poly)?;
        let points = poly.vertices().to_vec();
        let sides = chains.sides(points.len());

        // Merge the chain interiors by descending sweep order.
        let l = &chains.left[1..chains.left.len() - 1];
        let r = &chains.right[1..chains.right.len() - 1];
        let mut order = Vec::with_capacity(points.len());
        order.push(chains.start);
        let (mut i, mut k) = (0, 0);
        while i < l.len() || k < r.len() {
            let take_left = k >= r.len() || (i < l.len() && above(&points[l[i]], &points[r[k]]));
            if take_left {
                order.push(l[i]);
                i += 1;
            } else {
                order.push(r[k]);
                k += 1;
            }
        }
        order.push(chains.end);

        let visible = vec![order[0], order[1]];
        Ok(Self {
            eps: cfg.eps,
            points,
            order,
            sides,
            visible,
            next: 2,
            closed: false,
            out: Triangulation::default(),
        })
    }

    fn emit_diagonal(&mut self, v: usize, e: usize) {
        self.out.diagonals.push((v, e));
    }

    fn emit_triangle(&mut self, e: usize, a: usize, b: usize) {
        self.out.triangles.push([e, a, b]);
    }

    /// Whether the diagonal e–v stays inside, given the last vertex `last`
    /// connected to e on its own chain.
    fn admissible(&self, e: usize, last: usize, v: usize) -> bool {
        let o = orient(self.points[e], self.points[last], self.points[v]);
        match self.sides[e] {
            Side::Left => o < -self.eps,
            Side::Right => o > self.eps,
        }
    }

    fn process(&mut self, e: usize) {
        let top = self.visible[self.visible.len() - 1];
        if self.sides[e] != self.sides[top] {
            // Every visible vertex sees e. The bottom one is e's polygon
            // neighbor; the old top blocks the rest from now on.
            let stack = std::mem::take(&mut self.visible);
            for w in stack.windows(2) {
                self.emit_triangle(e, w[0], w[1]);
            }
            for &v in &stack[1..] {
                self.emit_diagonal(v, e);
            }
            self.visible = vec![top, e];
        } else {
            let mut last = top;
            self.visible.pop();
            while let Some(&v) = self.visible.last() {
                if !self.admissible(e, last, v) {
                    break;
                }
                self.visible.pop();
                self.emit_diagonal(v, e);
                self.emit_triangle(e, last, v);
                last = v;
            }
            self.visible.push(last);
            self.visible.push(e);
        }
    }

    /// Connect the End vertex to everything still visible.
    fn close_fan(&mut self) {
        let end = self.order[self.order.len() - 1];
        let stack = std::mem::take(&mut self.visible);
        for w in stack.windows(2) {
            self.emit_triangle(end, w[0], w[1]);
        }
        if stack.len() > 2 {
            for &v in &stack[1..stack.len() - 1] {
                self.emit_diagonal(v, end);
            }
        }
        self.closed = true;
    }
}

impl Stepper for MonotoneTriangulator {
    type Snapshot = TriangulationSnapshot;
    type Output = Triangulation;

    fn advance(&mut self) -> bool {
        if self.closed {
            return false;
        }
        if self.next < self.order.len() - 1 {
            let e = self.order[self.next];
            self.process(e);
            self.next += 1;
        } else {
            self.close_fan();
        }
        true
    }

    fn snapshot(&self) -> TriangulationSnapshot {
        let at = self.next.min(self.order.len() - 1);
        TriangulationSnapshot {
            sweep_y: self.points[self.order[at]].y,
            diagonals: self.out.diagonals.clone(),
            visible: self.visible.clone(),
        }
    }

    fn finish(self) -> Triangulation {
        tracing::debug!(
            vertices = self.points.len(),
            diagonals = self.out.diagonals.len(),
            triangles = self.out.triangles.len(),
            "monotone: triangulated"
        );
        self.out
    }
}

/// Triangulate a y-monotone counter-clockwise polygon.
pub fn triangulate_monotone(poly: &Polygon, cfg: GeomCfg) -> Result<Triangulation, GeomError> {
    Ok(run_to_end(MonotoneTriangulator::new(poly, cfg)?))
}

/// Snapshots before each event vertex and before closing the fan.
pub fn triangulation_steps(
    poly: &Polygon,
    cfg: GeomCfg,
) -> Result<Steps<MonotoneTriangulator>, GeomError> {
    Ok(Steps::new(MonotoneTriangulator::new(poly, cfg)?))
}
