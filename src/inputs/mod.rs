pub(crate) mod polygon;
pub use polygon::{Polygon, area};
mod vertex;
pub use vertex::{Vertex, Point};
