use num_traits::real::Real;

use crate::{Kernel, Point};

/// Segment intersection tests, built on the [Kernel]'s orientation predicates
impl<C: Real> Kernel<C> {
    /// Segments `ab` and `cd` cross at a single point interior to both.
    ///
    /// Returns `false` whenever any three of the four points are collinear, so touching and
    /// overlapping segments are not proper intersections.
    pub fn intersect_prop(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>, d: &Point<C>) -> bool {
        if self.collinear(a, b, c) || self.collinear(a, b, d) || self.collinear(c, d, a) || self.collinear(c, d, b) {
            return false;
        }

        (self.left(a, b, c) != self.left(a, b, d)) && (self.left(c, d, a) != self.left(c, d, b))
    }

    /// Segments `ab` and `cd` share at least one point, either by crossing or by an endpoint of
    /// one lying on the other
    pub fn intersect(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>, d: &Point<C>) -> bool {
        self.intersect_prop(a, b, c, d)
            || self.between(a, b, c)
            || self.between(a, b, d)
            || self.between(c, d, a)
            || self.between(c, d, b)
    }
}
