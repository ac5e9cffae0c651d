//! Sweep-line detection of all pairwise segment intersections (Bentley–Ottmann).
//!
//! Purpose
//! - Report every distinct point where two input segments meet, sweeping a
//!   vertical line left to right over Begin/Intersection/End events.
//!
//! Model
//! - Events are ordered by point (x, then y) and then by kind
//!   `Begin < Intersection < End`, so segments meeting at a point are all
//!   active when the point is visited.
//! - A beginning segment is tested against every active segment. Any two
//!   segments that are ever active together meet this test when the later
//!   one begins, so each crossing pair is found exactly once.
//! - The status order along the sweep line is derived from geometry on demand
//!   rather than maintained by swaps at intersection events. The result set is
//!   the same; the per-event work is larger than the textbook variant.
//! - Found points are rounded to `GeomCfg::round_digits` decimals and
//!   deduplicated on the rounded value.
//!
//! Edge cases
//! - Segments touching only at a shared endpoint do not intersect.
//! - An endpoint of one segment lying inside another (T-junction) does.
//! - Parallel and collinear-overlapping segments report no point.
//!
//! Code cross-refs: `geom2::{intersection, round_point, Segment}`, `steps::Stepper`

mod detector;
mod event;
mod status;

use std::collections::HashSet;

use crate::geom2::{lex_cmp, round_point, GeomCfg, Point, Segment};
use crate::steps::{run_to_end, Steps};

pub use detector::BentleyOttmann;
pub use event::{Event, EventKind};
pub use status::SweepStatus;

/// Sweep position, active segments (bottom to top), queued event points and
/// intersections found so far.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepSnapshot {
    pub sweep_x: f64,
    pub status: Vec<usize>,
    pub pending: Vec<Point>,
    pub intersections: Vec<Point>,
}

/// Distinct intersection points of `segments`, sorted by (x, y).
pub fn bentley_ottmann(segments: &[Segment], cfg: GeomCfg) -> Vec<Point> {
    run_to_end(BentleyOttmann::new(segments, cfg))
}

/// Snapshots before every processed event.
pub fn sweep_steps(segments: &[Segment], cfg: GeomCfg) -> Steps<BentleyOttmann> {
    Steps::new(BentleyOttmann::new(segments, cfg))
}

/// Quadratic all-pairs baseline with the same rounding and endpoint rules.
///
/// Each pair is evaluated from the segment that begins later in sweep order,
/// as the sweep does, so both report bit-identical points.
pub fn brute_force_intersections(segments: &[Segment], cfg: GeomCfg) -> Vec<Point> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for i in 0..segments.len() {
        for j in i + 1..segments.len() {
            let (first, later) = if begins_before(segments, i, j) {
                (i, j)
            } else {
                (j, i)
            };
            let (a, b) = (&segments[later], &segments[first]);
            if touch_only_at_endpoint(a, b) {
                continue;
            }
            if let Some(p) = a.intersection(b) {
                let p = round_point(p, cfg.round_digits);
                if seen.insert(dedup_key(&p)) {
                    out.push(p);
                }
            }
        }
    }
    out.sort_by(lex_cmp);
    out
}

/// Begin-event order: lower endpoint, then id.
fn begins_before(segments: &[Segment], i: usize, j: usize) -> bool {
    lex_cmp(&segments[i].lower(), &segments[j].lower())
        .then(i.cmp(&j))
        .is_lt()
}

/// Non-parallel segments sharing an endpoint can only meet there.
#[inline]
pub(crate) fn touch_only_at_endpoint(a: &Segment, b: &Segment) -> bool {
    a.has_endpoint(&b.a()) || a.has_endpoint(&b.b())
}

#[inline]
pub(crate) fn dedup_key(p: &Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}
