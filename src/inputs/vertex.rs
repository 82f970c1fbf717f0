use std::fmt;

use num_traits::real::Real;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// An immutable point in the plane, as stored by a [Polygon](crate::Polygon) and emitted in a
/// [Triangle](crate::Triangle).
#[derive(Clone, Copy, PartialEq)]
pub struct Point<C: Real> {
    x: C,
    y: C,
}

impl<C: Real> Point<C> {
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn x(&self) -> C { self.x }

    #[inline(always)]
    pub fn y(&self) -> C { self.y }

    /// Copies the coordinates of any [Vertex]
    pub fn from_vertex<V: Vertex<Coordinate=C>>(v: &V) -> Self {
        Self::new(v.x(), v.y())
    }

    /// `true` unless either coordinate is NaN or infinite
    pub(crate) fn is_finite(&self) -> bool {
        // x - x is zero for every finite value, and NaN otherwise
        self.x - self.x == C::zero() && self.y - self.y == C::zero()
    }
}

impl<C: Real> fmt::Debug for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Point");
        if let Some(x) = self.x.to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y.to_f64() {
            tuple.field(&y);
        }
        tuple.finish()
    }
}

impl<C: Real> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x.to_f64(), self.y.to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Point<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C: Real> Vertex for Point<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.y
    }
}

impl<C: Real> From<[C; 2]> for Point<C> {
    fn from([x, y]: [C; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<C: Real> From<(C, C)> for Point<C> {
    fn from((x, y): (C, C)) -> Self {
        Self::new(x, y)
    }
}

impl<C: Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl<V: Vertex> Vertex for &V {
    type Coordinate = V::Coordinate;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        (**self).x()
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        (**self).y()
    }
}
