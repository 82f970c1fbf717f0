//! Triangulation of simple polygons by ear clipping.
//!
//! A [Polygon] is a single ring of vertices in either winding. Triangulating it yields exactly
//! `n - 2` non-degenerate [Triangle]s which tile its interior:
//!
//! ```
//! let square = earclip::Polygon::from_flat(&[0f64, 0., 4., 0., 4., 4., 0., 4.]).unwrap();
//! let triangles = earclip::triangulate(square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! assert_eq!(triangles.iter().map(|t| t.area()).sum::<f64>(), 16.);
//! ```
//!
//! All geometric decisions go through a [Kernel], whose tolerance is set by
//! [TriangulationOptions::tolerance].

mod idx;
mod orientation;
mod segment;
mod ring;
mod visibility;
mod ears;
mod simplicity;
mod clipping;
mod config;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
pub(crate) mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, InputError, InternalError};
pub use config::TriangulationOptions;
pub use orientation::{Kernel, Orientation, signed_area_2x};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

/// Triangulates `polygon` with the default [TriangulationOptions], consuming it.
///
/// See [Polygon::triangulate_with] to choose a tolerance or output winding.
pub fn triangulate<C: Real>(polygon: Polygon<C>) -> Result<Vec<Triangle<C>>, TriangulationError> {
    polygon.triangulate()
}
