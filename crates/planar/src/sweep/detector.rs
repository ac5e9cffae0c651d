//! Bentley–Ottmann event loop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::geom2::{lex_cmp, round_point, GeomCfg, Point, Segment};
use crate::steps::Stepper;

use super::event::{Event, EventKind};
use super::status::SweepStatus;
use super::{dedup_key, touch_only_at_endpoint, SweepSnapshot};

/// Sweep state: event queue, status and the intersections recorded so far.
#[derive(Clone, Debug)]
pub struct BentleyOttmann {
    segments: Vec<Segment>,
    round_digits: u32,
    queue: BinaryHeap<Reverse<Event>>,
    status: SweepStatus,
    seen: HashSet<(u64, u64)>,
    found: Vec<Point>,
    sweep_x: f64,
    processed: usize,
}

impl BentleyOttmann {
    pub fn new(segments: &[Segment], cfg: GeomCfg) -> Self {
        let mut queue = BinaryHeap::with_capacity(segments.len() * 2);
        for (id, s) in segments.iter().enumerate() {
            queue.push(Reverse(Event::begin(s.lower(), id)));
            queue.push(Reverse(Event::end(s.upper(), id)));
        }
        let sweep_x = queue
            .peek()
            .map(|Reverse(e)| e.point.x)
            .unwrap_or(0.0);
        Self {
            segments: segments.to_vec(),
            round_digits: cfg.round_digits,
            queue,
            status: SweepStatus::default(),
            seen: HashSet::new(),
            found: Vec::new(),
            sweep_x,
            processed: 0,
        }
    }

    /// Current sweep position: the next event's x, or the last one's when done.
    pub fn sweep_x(&self) -> f64 {
        self.queue
            .peek()
            .map(|Reverse(e)| e.point.x)
            .unwrap_or(self.sweep_x)
    }

    fn handle_begin(&mut self, id: usize) {
        let seg = self.segments[id];
        let mut fresh: Vec<(Point, usize)> = Vec::new();
        for other in self.status.ids() {
            let o = &self.segments[other];
            if touch_only_at_endpoint(&seg, o) {
                continue;
            }
            let Some(p) = seg.intersection(o) else {
                continue;
            };
            let p = round_point(p, self.round_digits);
            if self.seen.insert(dedup_key(&p)) {
                fresh.push((p, other));
            }
        }
        for (p, other) in fresh {
            tracing::trace!(x = p.x, y = p.y, a = id, b = other, "sweep: intersection");
            self.found.push(p);
            self.queue.push(Reverse(Event::intersection(p, id, other)));
        }
        self.status.insert(id);
    }
}

impl Stepper for BentleyOttmann {
    type Snapshot = SweepSnapshot;
    type Output = Vec<Point>;

    fn advance(&mut self) -> bool {
        let Some(Reverse(event)) = self.queue.pop() else {
            return false;
        };
        self.sweep_x = event.point.x;
        self.processed += 1;
        match event.kind {
            EventKind::Begin => self.handle_begin(event.segment),
            EventKind::End => {
                self.status.remove(event.segment);
            }
            // The point was recorded on discovery; the status order is
            // recomputed from geometry, so there is nothing to swap.
            EventKind::Intersection => {}
        }
        true
    }

    fn snapshot(&self) -> SweepSnapshot {
        let sweep_x = self.sweep_x();
        let mut pending: Vec<Event> = self.queue.iter().map(|Reverse(e)| *e).collect();
        pending.sort();
        let mut intersections = self.found.clone();
        intersections.sort_by(lex_cmp);
        SweepSnapshot {
            sweep_x,
            status: self.status.ordered_at(sweep_x, &self.segments),
            pending: pending.into_iter().map(|e| e.point).collect(),
            intersections,
        }
    }

    fn finish(self) -> Vec<Point> {
        tracing::debug!(
            segments = self.segments.len(),
            events = self.processed,
            intersections = self.found.len(),
            "sweep: done"
        );
        let mut out = self.found;
        out.sort_by(lex_cmp);
        out
    }
}
