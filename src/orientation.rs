use std::cell::Cell;

use num_traits::real::Real;

use crate::{Point, Vertex};

/// The turn direction of the path `a -> b -> c`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    pub fn is_ccw(self) -> bool { self == Orientation::CounterClockwise }
    pub fn is_cw(self) -> bool { self == Orientation::Clockwise }
    pub fn is_collinear(self) -> bool { self == Orientation::Collinear }
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when `c` lies to the left of the directed line `a -> b` (a counter-clockwise turn),
/// negative when it lies to the right, and zero when the three points are collinear.
#[inline]
pub fn signed_area_2x<V: Vertex>(a: &V, b: &V, c: &V) -> V::Coordinate {
    (b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())
}

/// Orientation predicates evaluated against a fixed tolerance.
///
/// Any doubled area within `[-tolerance, tolerance]` is treated as collinear. Areas which are
/// non-zero but inside that band are counted as ambiguous, so a failed triangulation can tell
/// malformed input apart from input that is merely near-degenerate for the chosen tolerance.
#[derive(Debug)]
pub struct Kernel<C: Real> {
    tolerance: C,
    ambiguous: Cell<usize>,
}

impl<C: Real> Kernel<C> {
    /// Creates a kernel with the given tolerance. Negative tolerances are treated as zero.
    pub fn new(tolerance: C) -> Self {
        Self {
            tolerance: tolerance.max(C::zero()),
            ambiguous: Cell::new(0),
        }
    }

    /// A kernel which only treats an exactly zero area as collinear
    pub fn exact() -> Self {
        Self::new(C::zero())
    }

    pub fn tolerance(&self) -> C {
        self.tolerance
    }

    /// The number of tests so far whose area was non-zero but within tolerance
    pub fn ambiguous_tests(&self) -> usize {
        self.ambiguous.get()
    }

    pub fn orientation(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>) -> Orientation {
        self.classify(signed_area_2x(a, b, c))
    }

    /// Classifies a signed (doubled) area against the tolerance band
    pub fn classify(&self, area: C) -> Orientation {
        if area > self.tolerance {
            Orientation::CounterClockwise
        } else if area < -self.tolerance {
            Orientation::Clockwise
        } else {
            if area != C::zero() {
                self.ambiguous.set(self.ambiguous.get() + 1);
            }
            Orientation::Collinear
        }
    }

    /// `c` is strictly left of the directed line `a -> b`
    #[inline]
    pub fn left(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>) -> bool {
        self.orientation(a, b, c).is_ccw()
    }

    /// `c` is left of, or on, the directed line `a -> b`
    #[inline]
    pub fn left_on(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>) -> bool {
        !self.orientation(a, b, c).is_cw()
    }

    #[inline]
    pub fn collinear(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>) -> bool {
        self.orientation(a, b, c).is_collinear()
    }

    /// `a`, `b` and `c` are collinear and `c` lies on the closed segment `ab`.
    ///
    /// The extent check uses the x axis unless `ab` is vertical.
    pub fn between(&self, a: &Point<C>, b: &Point<C>, c: &Point<C>) -> bool {
        if !self.collinear(a, b, c) {
            return false;
        }

        if a.x() != b.x() {
            (a.x() <= c.x() && c.x() <= b.x()) || (a.x() >= c.x() && c.x() >= b.x())
        } else {
            (a.y() <= c.y() && c.y() <= b.y()) || (a.y() >= c.y() && c.y() >= b.y())
        }
    }
}

impl<C: Real> Default for Kernel<C> {
    fn default() -> Self {
        Self::new(C::epsilon())
    }
}
