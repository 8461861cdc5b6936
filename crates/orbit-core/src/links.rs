//! Lines between shapes whose bounds overlap.

use crate::shape::{OrbitingShape, ShapeId};
use fnv::FnvHashSet;

/// Pairs that started or stopped overlapping during one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkChanges {
    pub added: Vec<(ShapeId, ShapeId)>,
    pub removed: Vec<(ShapeId, ShapeId)>,
}

impl LinkChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Every `(i, j)` with `i < j` whose centres are closer than the sum of their bounding radii.
pub fn overlapping_pairs(shapes: &[OrbitingShape]) -> Vec<(ShapeId, ShapeId)> {
    let mut pairs = Vec::new();
    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate().skip(i + 1) {
            let reach = a.bounding_radius() + b.bounding_radius();
            if a.position().distance_squared(b.position()) < reach * reach {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Active links carried from frame to frame. Pairs are stored as `(low, high)`.
#[derive(Clone, Debug, Default)]
pub struct LinkSet {
    active: FnvHashSet<(ShapeId, ShapeId)>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, a: ShapeId, b: ShapeId) -> bool {
        self.active.contains(&ordered(a, b))
    }

    /// Active pairs in ascending order.
    pub fn pairs(&self) -> Vec<(ShapeId, ShapeId)> {
        let mut pairs: Vec<_> = self.active.iter().copied().collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Recompute from current positions and report what changed.
    pub fn refresh(&mut self, shapes: &[OrbitingShape]) -> LinkChanges {
        let current: FnvHashSet<(ShapeId, ShapeId)> =
            overlapping_pairs(shapes).into_iter().collect();
        let mut changes = LinkChanges {
            added: current.difference(&self.active).copied().collect(),
            removed: self.active.difference(&current).copied().collect(),
        };
        changes.added.sort_unstable();
        changes.removed.sort_unstable();
        self.active = current;
        changes
    }
}

#[inline]
fn ordered(a: ShapeId, b: ShapeId) -> (ShapeId, ShapeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
