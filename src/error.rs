use thiserror::Error;

/// Top-level error type for the flatgeom library.
#[derive(Debug, Error)]
pub enum FlatgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to constructing degenerate geometry.
///
/// Geometric *no-result* (parallel lines, separated circles, empty
/// intersections) is never an error in this library; queries express it
/// with `Option` or an empty collection. Errors are reserved for inputs
/// that cannot produce a well-formed value at all, such as a direction
/// vector of zero length.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`FlatgeomError`].
pub type Result<T> = std::result::Result<T, FlatgeomError>;
