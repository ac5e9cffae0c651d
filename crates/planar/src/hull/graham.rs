//! Stack-based hull ("Graham scan").

use std::cmp::Ordering;

use crate::error::GeomError;
use crate::geom2::{orient, squared_distance, GeomCfg, Point};
use crate::steps::{run_to_end, Stepper, Steps};

use super::{validate, HullSnapshot};

/// Graham scan state: angularly sorted candidates and the hull stack.
#[derive(Clone, Debug)]
pub struct Graham {
    eps: f64,
    order: Vec<Point>,
    stack: Vec<Point>,
    next: usize,
}

impl Graham {
    pub fn new(points: &[Point], cfg: GeomCfg) -> Result<Self, GeomError> {
        let i0 = validate(points, cfg.eps)?;
        let p0 = points[i0];
        let mut rest: Vec<Point> = points
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != i0)
            .map(|(_, p)| *p)
            .collect();

        // All candidates lie in the closed upper half-plane of p0, so the
        // orientation sign orders them by increasing CCW angle.
        rest.sort_by(|a, b| {
            let o = orient(p0, *a, *b);
            if o > 0.0 {
                Ordering::Less
            } else if o < 0.0 {
                Ordering::Greater
            } else {
                squared_distance(p0, *a).total_cmp(&squared_distance(p0, *b))
            }
        });

        // Keep only the farthest point of each ray through p0.
        let mut order: Vec<Point> = Vec::with_capacity(rest.len());
        for p in rest {
            if let Some(last) = order.last_mut() {
                if orient(p0, *last, p).abs() <= cfg.eps {
                    if squared_distance(p0, p) > squared_distance(p0, *last) {
                        *last = p;
                    }
                    continue;
                }
            }
            order.push(p);
        }
        // Duplicates of p0 sort first and are absorbed by the next ray.
        if order.len() < 2 {
            return Err(GeomError::Collinear {
                count: points.len(),
            });
        }

        tracing::debug!(
            input = points.len(),
            candidates = order.len(),
            "graham: sorted candidates"
        );
        Ok(Self {
            eps: cfg.eps,
            order,
            stack: vec![p0],
            next: 0,
        })
    }

    /// Point to be tested by the next step, if any.
    #[inline]
    pub fn candidate(&self) -> Option<Point> {
        self.order.get(self.next).copied()
    }
}

impl Stepper for Graham {
    type Snapshot = HullSnapshot;
    type Output = Vec<Point>;

    fn advance(&mut self) -> bool {
        let Some(p) = self.candidate() else {
            return false;
        };
        let n = self.stack.len();
        if n < 2 || orient(self.stack[n - 2], self.stack[n - 1], p) > self.eps {
            self.stack.push(p);
            self.next += 1;
        } else {
            self.stack.pop();
        }
        true
    }

    fn snapshot(&self) -> HullSnapshot {
        let candidate = self.candidate();
        HullSnapshot {
            hull: self.stack.clone(),
            candidate,
            done: candidate.is_none(),
        }
    }

    fn finish(self) -> Vec<Point> {
        tracing::debug!(vertices = self.stack.len(), "graham: hull closed");
        self.stack
    }
}

/// Convex hull by angular sort and stack (CCW, from the lowest point).
pub fn graham(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, GeomError> {
    Ok(run_to_end(Graham::new(points, cfg)?))
}

/// Snapshots of the stack before every push/pop decision.
pub fn graham_steps(points: &[Point], cfg: GeomCfg) -> Result<Steps<Graham>, GeomError> {
    Ok(Steps::new(Graham::new(points, cfg)?))
}
