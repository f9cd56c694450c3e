/// Convenience result type used across Gridfolio.
pub type GridfolioResult<T> = Result<T, GridfolioError>;

/// Top-level error taxonomy used by the library APIs.
///
/// The packer itself never fails; errors only surface at the edges
/// (option validation, manifest lookup, JSON loading).
#[derive(thiserror::Error, Debug)]
pub enum GridfolioError {
    /// Invalid user-provided options or data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or inconsistent images-manifest entries.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridfolioError {
    /// Build a [`GridfolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridfolioError::Manifest`] value.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Build a [`GridfolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GridfolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
