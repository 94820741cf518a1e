/// Convenience result type used across the funnel engine.
pub type FunnelResult<T> = Result<T, FunnelError>;

/// Top-level error taxonomy used by layout, curve and scene APIs.
#[derive(thiserror::Error, Debug)]
pub enum FunnelError {
    /// Input is not a well-formed ordered sequence of steps, or options are out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A step cannot be normalized (zero total, negative or non-finite segment totals).
    #[error("invalid step: {0}")]
    InvalidStep(String),

    /// Steps disagree on segment count (or segment names, when checked).
    #[error("mismatched segment count: {0}")]
    MismatchedSegmentCount(String),

    /// Palette configuration or lookup failure.
    #[error("palette error: {0}")]
    Palette(String),

    /// The text measurement collaborator could not measure a label.
    #[error("text measurement error: {0}")]
    Measure(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped error coming from a caller-provided callback.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FunnelError {
    /// Build a [`FunnelError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`FunnelError::InvalidStep`] value.
    pub fn invalid_step(msg: impl Into<String>) -> Self {
        Self::InvalidStep(msg.into())
    }

    /// Build a [`FunnelError::MismatchedSegmentCount`] value.
    pub fn mismatched_segments(msg: impl Into<String>) -> Self {
        Self::MismatchedSegmentCount(msg.into())
    }

    /// Build a [`FunnelError::Palette`] value.
    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }

    /// Build a [`FunnelError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`FunnelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
