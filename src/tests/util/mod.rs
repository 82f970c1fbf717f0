pub mod polygon;
mod load_polygon_list;
mod vtest;
mod random;
mod check;
use std::{env, path};

pub use vtest::VTest;
pub use load_polygon_list::load_polygon_list;
pub use random::random_star;
pub use check::{assert_valid_triangulation, canonical_triangles, ring_contains};

pub fn polygons_path() -> path::PathBuf {
    path::Path::new(&env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default()).join("resources").join("polygons")
}
