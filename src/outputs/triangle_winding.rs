/// The order the vertices in a triangle are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TriangleWinding {
    Counterclockwise,
    Clockwise,
}

impl TriangleWinding {
    /// Puts a counter-clockwise triple into this winding
    pub(crate) fn order<T>(self, v0: T, v1: T, v2: T) -> (T, T, T) {
        match self {
            TriangleWinding::Counterclockwise => (v0, v1, v2),
            TriangleWinding::Clockwise => (v0, v2, v1),
        }
    }
}
