use crate::foundation::core::Size;

/// Convenience result type used across tracemark.
pub type TracemarkResult<T> = Result<T, TracemarkError>;

/// Top-level error taxonomy used by the capture and compare APIs.
///
/// "No watermark captured" and "no paint surface" are deliberately absent: they resolve to
/// `false` and [`crate::Capture::NoPaintSurface`] respectively.
#[derive(thiserror::Error, Debug)]
pub enum TracemarkError {
    /// Invalid buffer construction or out-of-range pixel access.
    #[error("validation error: {0}")]
    Validation(String),

    /// Template and current paint buffer disagree on width or height.
    #[error(
        "dimension mismatch: template is {}x{}, current paint buffer is {}x{}",
        expected.width,
        expected.height,
        actual.width,
        actual.height
    )]
    DimensionMismatch {
        /// Size of the captured template.
        expected: Size,
        /// Size of the buffer it was compared against.
        actual: Size,
    },

    /// Errors when parsing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TracemarkError {
    /// Build a [`TracemarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TracemarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TracemarkError::DimensionMismatch`] value.
    pub fn dimension_mismatch(expected: Size, actual: Size) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
