use std::fmt;

/// Failure cases for operations with a numeric singularity.
///
/// These are programmer-error-class conditions surfaced immediately to the
/// caller; there is no retry or recovery path for any of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Polygon has zero signed area (degenerate/collinear vertexes) so its
    /// centroid is undefined.
    DegeneratePolygon,
    /// Vector has zero length so it has no direction to normalize.
    ZeroLengthVector,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegeneratePolygon => {
                write!(f, "polygon is degenerate (zero area), centroid is undefined")
            }
            Error::ZeroLengthVector => {
                write!(f, "vector has zero length, direction is undefined")
            }
        }
    }
}

impl std::error::Error for Error {}
