//! Sweep events and their queue order.

use std::cmp::Ordering;

use crate::geom2::{lex_cmp, Point};

/// Event kinds in tie-break precedence: at one point, segments begin before
/// intersections are visited, and end last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Begin,
    Intersection,
    End,
}

/// A point where the sweep must stop.
///
/// `segment` is the segment that begins or ends here; for an intersection it
/// is the segment whose Begin discovered the point and `other` the segment it
/// was tested against.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub point: Point,
    pub kind: EventKind,
    pub segment: usize,
    pub other: Option<usize>,
}

impl Event {
    pub fn begin(point: Point, segment: usize) -> Self {
        Self {
            point,
            kind: EventKind::Begin,
            segment,
            other: None,
        }
    }

    pub fn end(point: Point, segment: usize) -> Self {
        Self {
            point,
            kind: EventKind::End,
            segment,
            other: None,
        }
    }

    pub fn intersection(point: Point, segment: usize, other: usize) -> Self {
        Self {
            point,
            kind: EventKind::Intersection,
            segment,
            other: Some(other),
        }
    }
}

/// Point (x, then y), then kind, then segment ids.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        lex_cmp(&self.point, &other.point)
            .then(self.kind.cmp(&other.kind))
            .then(self.segment.cmp(&other.segment))
            .then(self.other.cmp(&other.other))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}
