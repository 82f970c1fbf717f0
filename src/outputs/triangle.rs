use std::{fmt, ops};

use num_traits::real::Real;

use crate::{Point, orientation::signed_area_2x};

/// A triangle emitted by triangulation, holding copies of its three corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<C: Real>([Point<C>; 3]);

impl<C: Real> Triangle<C> {
    pub fn new(v0: Point<C>, v1: Point<C>, v2: Point<C>) -> Self {
        Self([v0, v1, v2])
    }

    pub fn vertices(&self) -> &[Point<C>; 3] {
        &self.0
    }

    /// The signed area; positive when the corners are listed counter-clockwise
    pub fn signed_area(&self) -> C {
        let [a, b, c] = &self.0;
        signed_area_2x(a, b, c) / (C::one() + C::one())
    }

    pub fn area(&self) -> C {
        self.signed_area().abs()
    }

    /// Checks whether `p` lies inside the triangle or on its boundary, regardless of winding.
    pub fn contains(&self, p: &Point<C>) -> bool {
        let [a, b, c] = &self.0;
        let d0 = signed_area_2x(a, b, p);
        let d1 = signed_area_2x(b, c, p);
        let d2 = signed_area_2x(c, a, p);
        let zero = C::zero();
        let has_neg = d0 < zero || d1 < zero || d2 < zero;
        let has_pos = d0 > zero || d1 > zero || d2 > zero;
        !(has_neg && has_pos)
    }
}

impl<C: Real> ops::Index<usize> for Triangle<C> {
    type Output = Point<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<C: Real> From<Triangle<C>> for [Point<C>; 3] {
    fn from(t: Triangle<C>) -> Self {
        t.0
    }
}

impl<C: Real> fmt::Display for Triangle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
