//! Splitting a y-monotone polygon into its left and right chains.

use crate::error::GeomError;
use crate::geom2::Polygon;

use super::classify::{classify_poly, VertexClass};

/// Which boundary chain a vertex belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Both chains run from the Start vertex down to the End vertex and include
/// both of them. Entries are vertex indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Chains {
    pub start: usize,
    pub end: usize,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl Chains {
    /// Chain of every vertex; Start counts as left, End as right.
    pub fn sides(&self, len: usize) -> Vec<Side> {
        let mut sides = vec![Side::Left; len];
        for &i in &self.right {
            sides[i] = Side::Right;
        }
        sides[self.start] = Side::Left;
        sides
    }
}

/// Left chain follows the vertex order from Start, right chain the reverse.
///
/// Fails with `NotMonotone` unless the polygon has exactly one Start, one End
/// and no Split or Merge vertex.
pub fn two_chains(poly: &Polygon) -> Result<Chains, GeomError> {
    let classification = classify_poly(poly);
    let starts = classification.indices(VertexClass::Start);
    let ends = classification.indices(VertexClass::End);
    if !classification.is_y_monotone() || starts.len() != 1 || ends.len() != 1 {
        return Err(GeomError::NotMonotone {
            split: classification.count(VertexClass::Split),
            merge: classification.count(VertexClass::Merge),
        });
    }
    let (start, end) = (starts[0], ends[0]);

    let mut left = vec![start];
    let mut i = start;
    while i != end {
        i = poly.next_index(i);
        left.push(i);
    }
    let mut right = vec![start];
    let mut i = start;
    while i != end {
        i = poly.prev_index(i);
        right.push(i);
    }
    Ok(Chains {
        start,
        end,
        left,
        right,
    })
}
