use num_traits::real::Real;

use crate::TriangleWinding;

/// Tunables for a single triangulation.
///
/// ```
/// use earclip::{Polygon, TriangleWinding, TriangulationOptions};
///
/// let options = TriangulationOptions::new()
///     .tolerance(1e-9)
///     .winding(TriangleWinding::Clockwise);
/// let square = Polygon::from_flat(&[0., 0., 4., 0., 4., 4., 0., 4.]).unwrap();
/// assert_eq!(square.triangulate_with(&options).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationOptions<C: Real> {
    /// Largest doubled triangle area still treated as zero by the orientation predicates.
    ///
    /// Defaults to `C::epsilon()`. The value is absolute, so input with large coordinates or
    /// near-degenerate features will usually need it raised.
    pub tolerance: C,
    /// Reject self-intersecting rings with an O(n²) edge check before clipping. Defaults to `true`.
    ///
    /// Clipping a non-simple ring can appear to succeed and produce overlapping triangles, so only
    /// turn this off for input already known to be simple.
    pub check_simplicity: bool,
    /// The vertex order of emitted triangles. Defaults to [TriangleWinding::Counterclockwise].
    pub winding: TriangleWinding,
}

impl<C: Real> TriangulationOptions<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(mut self, tolerance: C) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn check_simplicity(mut self, check_simplicity: bool) -> Self {
        self.check_simplicity = check_simplicity;
        self
    }

    pub fn winding(mut self, winding: TriangleWinding) -> Self {
        self.winding = winding;
        self
    }
}

impl<C: Real> Default for TriangulationOptions<C> {
    fn default() -> Self {
        Self {
            tolerance: C::epsilon(),
            check_simplicity: true,
            winding: TriangleWinding::Counterclockwise,
        }
    }
}
