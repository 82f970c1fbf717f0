use num_traits::real::Real;

use crate::{Kernel, Point, idx::Idx, ring::{Link, Ring}};

/// Visibility tests between vertices of the current ring.
///
/// Each test sees the ring as it is now, so results go stale as soon as the ring is edited.
pub(crate) struct Visibility<'s, C: Real> {
    points: &'s [Point<C>],
    ring: &'s Ring,
    kernel: &'s Kernel<C>,
}

impl<'s, C: Real> Visibility<'s, C> {
    pub fn new(points: &'s [Point<C>], ring: &'s Ring, kernel: &'s Kernel<C>) -> Self {
        Self { points, ring, kernel }
    }

    #[inline(always)]
    fn point(&self, v: Idx<Link>) -> &'s Point<C> {
        &self.points[v.usize()]
    }

    /// The segment `ab` meets no ring edge other than those incident to `a` or `b`. O(n).
    pub fn diagonalie(&self, a: Idx<Link>, b: Idx<Link>) -> bool {
        let (pa, pb) = (self.point(a), self.point(b));
        self.ring.iter().all(|c| {
            let c1 = self.ring.next(c);
            c == a || c1 == a || c == b || c1 == b
                || !self.kernel.intersect(pa, pb, self.point(c), self.point(c1))
        })
    }

    /// `b` lies strictly within the interior wedge at `a`, bounded by `a`'s two ring edges.
    ///
    /// Assumes a counter-clockwise ring. O(1).
    pub fn in_cone(&self, a: Idx<Link>, b: Idx<Link>) -> bool {
        let a0 = self.point(self.ring.prev(a));
        let a1 = self.point(self.ring.next(a));
        let (pa, pb) = (self.point(a), self.point(b));

        if self.kernel.left_on(pa, a1, a0) {
            // Convex corner
            self.kernel.left(pa, pb, a0) && self.kernel.left(pb, pa, a1)
        } else {
            // Reflex corner: the interior is everything outside the opposite wedge
            !(self.kernel.left_on(pa, pb, a1) && self.kernel.left_on(pb, pa, a0))
        }
    }

    /// `ab` is a diagonal: it lies inside the polygon and touches its boundary only at `a` and `b`. O(n).
    pub fn diagonal(&self, a: Idx<Link>, b: Idx<Link>) -> bool {
        self.in_cone(a, b) && self.in_cone(b, a) && self.diagonalie(a, b)
    }

    /// `v` can be clipped: its corner turns strictly left and its neighbours see each other
    pub fn is_ear(&self, v: Idx<Link>) -> bool {
        let v0 = self.ring.prev(v);
        let v2 = self.ring.next(v);
        self.kernel.left(self.point(v0), self.point(v), self.point(v2)) && self.diagonal(v0, v2)
    }
}
