use std::ops;

use num_traits::real::Real;

use crate::{idx::Idx, ring::{Link, Ring}, visibility::Visibility};

/// Ear status of every ring vertex, keyed by vertex index.
///
/// Kept apart from the geometry: an entry is only meaningful while its vertex is linked, and
/// only until one of that vertex's neighbours changes.
#[derive(Debug, Clone)]
pub(crate) struct EarTable {
    ears: Vec<bool>,
    count: usize,
}

impl EarTable {
    /// Classifies every vertex of `ring`. O(n²).
    pub fn init<C: Real>(ring: &Ring, visibility: &Visibility<'_, C>) -> Self {
        let mut table = Self {
            ears: vec![false; ring.arena_len()],
            count: 0,
        };
        for v in ring.iter() {
            table.set(v, visibility.is_ear(v));
        }
        table
    }

    /// Recomputes the status of `v` after its neighbourhood changed. O(n).
    pub fn update<C: Real>(&mut self, v: Idx<Link>, visibility: &Visibility<'_, C>) {
        self.set(v, visibility.is_ear(v));
    }

    /// Drops `v` from the table once it has been clipped
    pub fn clear(&mut self, v: Idx<Link>) {
        self.set(v, false);
    }

    fn set(&mut self, v: Idx<Link>, is_ear: bool) {
        let slot = &mut self.ears[v.usize()];
        match (*slot, is_ear) {
            (false, true) => self.count += 1,
            (true, false) => self.count -= 1,
            _ => (),
        }
        *slot = is_ear;
    }

    /// The number of vertices currently flagged as ears
    pub fn count(&self) -> usize {
        self.count
    }
}

impl ops::Index<Idx<Link>> for EarTable {
    type Output = bool;

    fn index(&self, index: Idx<Link>) -> &Self::Output {
        &self.ears[index.usize()]
    }
}
