/// Convenience result type used across the crate.
pub type EyeResult<T> = Result<T, EyeError>;

/// Top-level error taxonomy used by generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum EyeError {
    /// Invalid user-provided options (unknown mood, bad thread count).
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel-buffer shape violations (ragged rows, wrong cell count, empty image).
    #[error("layout error: {0}")]
    Layout(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EyeError {
    /// Build an [`EyeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EyeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
