use std::ops;

use num_traits::{One, Zero, real::Real};

use crate::{List, Point, Triangle, TriangleWinding, TriangulationError, TriangulationOptions, clipping::ClipState, errors::InputError, orientation::signed_area_2x};

use super::vertex::Vertex;

/// The signed area enclosed by the closed ring through `vertices`.
///
/// Positive for counter-clockwise rings, negative for clockwise rings. Fewer than 3 vertices
/// enclose no area.
pub fn area<V: Vertex>(vertices: &[V]) -> V::Coordinate {
    let zero = V::Coordinate::zero();
    let (first, rest) = match vertices.split_first() {
        Some(split) if vertices.len() >= 3 => split,
        _ => return zero,
    };
    // Fan from the first vertex
    let doubled = rest.windows(2).fold(zero, |sum, w| sum + signed_area_2x(first, &w[0], &w[1]));
    doubled / (V::Coordinate::one() + V::Coordinate::one())
}

/// A simple polygon given by a single ring of vertices, in either winding.
///
/// The ring is implicitly closed: the last vertex connects back to the first, and the first vertex
/// should not be repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<C: Real> {
    points: Vec<Point<C>>,
}

impl<C: Real> Polygon<C> {
    /// Builds a polygon from interleaved coordinates `x0, y0, x1, y1, ...`
    ///
    /// ```
    /// let square = earclip::Polygon::from_flat(&[0., 0., 4., 0., 4., 4., 0., 4.]).unwrap();
    /// assert_eq!(square.len(), 4);
    /// ```
    pub fn from_flat(coordinates: &[C]) -> Result<Self, InputError> {
        if coordinates.len() % 2 != 0 {
            return Err(InputError::OddCoordinateCount(coordinates.len()));
        }
        Self::from_points(coordinates.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1])).collect())
    }

    /// Builds a polygon by copying the coordinates of each [Vertex]
    pub fn from_vertices<V: Vertex<Coordinate=C>, I: IntoIterator<Item=V>>(vertices: I) -> Result<Self, InputError> {
        Self::from_points(vertices.into_iter().map(|v| Point::from_vertex(&v)).collect())
    }

    fn from_points(points: Vec<Point<C>>) -> Result<Self, InputError> {
        if points.len() < 3 {
            return Err(InputError::NotEnoughVertices(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InputError::NonFiniteCoordinate(index));
        }
        Ok(Self { points })
    }

    pub fn vertices(&self) -> &[Point<C>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, since a polygon has at least 3 vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// See [area]
    pub fn signed_area(&self) -> C {
        area(&self.points)
    }

    /// The direction the ring runs in, or `None` if it encloses no area
    pub fn winding(&self) -> Option<TriangleWinding> {
        let a = self.signed_area();
        if a > C::zero() {
            Some(TriangleWinding::Counterclockwise)
        } else if a < C::zero() {
            Some(TriangleWinding::Clockwise)
        } else {
            None
        }
    }

    /// Triangulates with the default [TriangulationOptions]
    pub fn triangulate(&self) -> Result<Vec<Triangle<C>>, TriangulationError> {
        self.triangulate_with(&TriangulationOptions::default())
    }

    /// Returns the `n - 2` triangles covering the polygon
    pub fn triangulate_with(&self, options: &TriangulationOptions<C>) -> Result<Vec<Triangle<C>>, TriangulationError> {
        let mut triangles = Vec::with_capacity(self.len() - 2);
        self.triangulate_into(options, &mut triangles)?;
        Ok(triangles)
    }

    /// Appends the triangles to `list` as copies of their vertices.
    ///
    /// If triangulation fails, `list` is restored to its previous length.
    pub fn triangulate_into<L: List<Point<C>>>(&self, options: &TriangulationOptions<C>, mut list: L) -> Result<usize, TriangulationError> {
        let points = &self.points;
        self.run::<Point<C>, _, _>(options, &mut list, |list, v0, v1, v2| list.push(points[v0], points[v1], points[v2]))
    }

    /// Appends the triangles to `list` as indices into [Polygon::vertices], suitable for an index
    /// buffer.
    ///
    /// If triangulation fails, `list` is restored to its previous length.
    pub fn triangulate_indices_into<L: List<usize>>(&self, options: &TriangulationOptions<C>, mut list: L) -> Result<usize, TriangulationError> {
        self.run::<usize, _, _>(options, &mut list, |list, v0, v1, v2| list.push(v0, v1, v2))
    }

    fn run<V, L: List<V>, F: FnMut(&mut L, usize, usize, usize)>(&self, options: &TriangulationOptions<C>, list: &mut L, mut push: F) -> Result<usize, TriangulationError> {
        let initial_len = list.len();
        let result = ClipState::new(&self.points, options)
            .and_then(|state| state.clip_all(|v0, v1, v2| push(&mut *list, v0, v1, v2)));
        if result.is_err() {
            list.truncate(initial_len);
        }
        result
    }
}

impl<C: Real> ops::Index<usize> for Polygon<C> {
    type Output = Point<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
