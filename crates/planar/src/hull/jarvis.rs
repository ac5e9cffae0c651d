//! Gift-wrapping hull ("Jarvis march").

use crate::error::GeomError;
use crate::geom2::{orient, squared_distance, GeomCfg, Point};
use crate::steps::{run_to_end, Stepper, Steps};

use super::{validate, HullSnapshot};

/// Jarvis march state. One step examines one candidate point.
#[derive(Clone, Debug)]
pub struct Jarvis {
    eps: f64,
    points: Vec<Point>,
    hull: Vec<Point>,
    best: Option<Point>,
    scan: usize,
    rounds: usize,
    max_rounds: usize,
    closed: bool,
    stalled: bool,
}

impl Jarvis {
    pub fn new(points: &[Point], cfg: GeomCfg) -> Result<Self, GeomError> {
        let i0 = validate(points, cfg.eps)?;
        Ok(Self {
            eps: cfg.eps,
            points: points.to_vec(),
            hull: vec![points[i0]],
            best: None,
            scan: 0,
            rounds: 0,
            max_rounds: points.len(),
            closed: false,
            stalled: false,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Point examined by the next step, if the hull is still open.
    #[inline]
    pub fn candidate(&self) -> Option<Point> {
        if self.closed {
            None
        } else {
            self.points.get(self.scan).copied()
        }
    }

    /// Replace `best` when `p` is further clockwise, or collinear and farther.
    fn consider(&mut self, p: Point) {
        let last = self.hull[self.hull.len() - 1];
        let Some(best) = self.best else {
            self.best = Some(p);
            return;
        };
        let o = orient(last, best, p);
        if o < -self.eps
            || (o.abs() <= self.eps && squared_distance(last, best) < squared_distance(last, p))
        {
            self.best = Some(p);
        }
    }

    fn close_round(&mut self) {
        self.scan = 0;
        self.rounds += 1;
        let Some(best) = self.best.take() else {
            self.closed = true;
            return;
        };
        if best == self.hull[0] {
            self.closed = true;
            return;
        }
        self.hull.push(best);
        // Each round adds a distinct hull vertex, so a closing walk needs at
        // most one round per input point.
        if self.rounds >= self.max_rounds {
            tracing::warn!(
                rounds = self.rounds,
                vertices = self.hull.len(),
                "jarvis: wrap did not return to the start point"
            );
            self.stalled = true;
            self.closed = true;
        }
    }
}

impl Stepper for Jarvis {
    type Snapshot = HullSnapshot;
    type Output = Result<Vec<Point>, GeomError>;

    fn advance(&mut self) -> bool {
        let Some(p) = self.candidate() else {
            return false;
        };
        self.consider(p);
        self.scan += 1;
        if self.scan == self.points.len() {
            self.close_round();
        }
        true
    }

    fn snapshot(&self) -> HullSnapshot {
        HullSnapshot {
            hull: self.hull.clone(),
            candidate: self.candidate(),
            done: self.closed,
        }
    }

    /// Fails with `HullNotClosed` when the round limit stopped the walk.
    fn finish(self) -> Result<Vec<Point>, GeomError> {
        if self.stalled {
            return Err(GeomError::HullNotClosed {
                rounds: self.rounds,
            });
        }
        tracing::debug!(
            vertices = self.hull.len(),
            rounds = self.rounds,
            "jarvis: hull closed"
        );
        Ok(self.hull)
    }
}

/// Convex hull by gift wrapping (CCW, from the lowest point).
pub fn jarvis(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, GeomError> {
    run_to_end(Jarvis::new(points, cfg)?)
}

/// Snapshots before each candidate comparison.
pub fn jarvis_steps(points: &[Point], cfg: GeomCfg) -> Result<Steps<Jarvis>, GeomError> {
    Ok(Steps::new(Jarvis::new(points, cfg)?))
}
