use thiserror::Error;

/// Top-level error type for the Draftlis curve kernel.
#[derive(Debug, Error)]
pub enum DraftlisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl DraftlisError {
    /// Returns `true` for a missing required input.
    #[must_use]
    pub fn is_null_argument(&self) -> bool {
        matches!(
            self,
            Self::Geometry(GeometryError::NullArgument(_)) | Self::Document(_)
        )
    }

    /// Returns `true` for degenerate geometric input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::InvalidArgument(_)))
    }

    /// Returns `true` for a geometrically impossible transformation.
    #[must_use]
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, Self::Operation(OperationError::IllegalAction(_)))
    }
}

/// Errors raised while building or querying curves.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("required argument is absent: {0}")]
    NullArgument(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to the curve arena.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("curve not found in drawing")]
    CurveNotFound,
}

/// Errors raised by derived-curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("illegal action: {0}")]
    IllegalAction(String),
}

/// Convenience type alias for results using [`DraftlisError`].
pub type Result<T> = std::result::Result<T, DraftlisError>;
