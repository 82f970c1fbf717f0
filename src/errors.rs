use std::{error, fmt};

use backtrace::Backtrace;

/// Describes why a [Polygon](crate::Polygon) could not be constructed from its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// Fewer than 3 vertices were supplied
    NotEnoughVertices(usize),
    /// A flat coordinate sequence had an odd length, so it cannot be split into `(x, y)` pairs
    OddCoordinateCount(usize),
    /// The vertex at this index has a NaN or infinite coordinate
    NonFiniteCoordinate(usize),
}

impl error::Error for InputError { }

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::OddCoordinateCount(count) => write!(f, "Flat coordinate list has an odd length ({})", count),
            Self::NonFiniteCoordinate(index) => write!(f, "Vertex {} has a non-finite coordinate", index),
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The input could not form a [Polygon](crate::Polygon)
    InvalidInput(InputError),
    /// No ear could be found while `remaining` vertices were left in the ring.
    ///
    /// The ring is self-intersecting, inconsistently wound, has zero area, or contains duplicate or
    /// folded-back vertices.
    DegenerateRing {
        /// Number of vertices still in the ring when clipping stopped
        remaining: usize,
    },
    /// No ear could be found, and at least one orientation test landed inside the tolerance band
    /// (non-zero, but too small to trust). Adjusting [TriangulationOptions::tolerance](crate::TriangulationOptions::tolerance)
    /// may resolve this.
    NumericAmbiguity {
        /// Number of vertices still in the ring when clipping stopped
        remaining: usize,
        /// Number of orientation tests which fell inside the tolerance band
        ambiguous_tests: usize,
    },
    /// A ring bookkeeping invariant was violated. This indicates a bug, not bad input.
    InternalError(InternalError),
}

impl TriangulationError {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl From<InputError> for TriangulationError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(error) => fmt::Display::fmt(error, f),
            Self::DegenerateRing { remaining } => write!(f, "No ear found with {} vertices remaining; the ring is not a simple polygon", remaining),
            Self::NumericAmbiguity { remaining, ambiguous_tests } => write!(f, "No ear found with {} vertices remaining; {} orientation tests were within tolerance", remaining, ambiguous_tests),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidInput(error) => Some(error),
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}
