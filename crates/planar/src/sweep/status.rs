//! Segments currently crossing the sweep line.

use std::collections::BTreeSet;

use crate::geom2::Segment;

/// Active segment ids.
///
/// Membership is kept in a `BTreeSet` (O(log n) insert/remove); the vertical
/// order along the sweep line depends on the sweep position and is recomputed
/// from geometry by [`SweepStatus::ordered_at`] instead of being maintained.
#[derive(Clone, Debug, Default)]
pub struct SweepStatus {
    active: BTreeSet<usize>,
}

impl SweepStatus {
    pub fn insert(&mut self, id: usize) -> bool {
        self.active.insert(id)
    }

    pub fn remove(&mut self, id: usize) -> bool {
        self.active.remove(&id)
    }

    /// Ids in increasing order (not sweep order).
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().copied()
    }

    /// Ids ordered bottom to top where the segments cross the vertical line at `x`.
    ///
    /// Ties (segments meeting on the line) are broken by id.
    pub fn ordered_at(&self, x: f64, segments: &[Segment]) -> Vec<usize> {
        let mut ids: Vec<usize> = self.active.iter().copied().collect();
        ids.sort_by(|&a, &b| {
            segments[a]
                .y_at(x)
                .total_cmp(&segments[b].y_at(x))
                .then(a.cmp(&b))
        });
        ids
    }
}
