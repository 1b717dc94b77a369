/// Convenience result type used across Scrollax.
pub type ScrollaxResult<T> = Result<T, ScrollaxError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Per-panel geometry failures (an image that never reports usable natural
/// dimensions, a degenerate aspect ratio) are intentionally NOT errors: the
/// affected panel is silently excluded so one misconfigured panel cannot
/// break parallax for the rest of the page.
#[derive(thiserror::Error, Debug)]
pub enum ScrollaxError {
    /// Invalid user-provided configuration or viewport data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or the host environment.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollaxError {
    /// Build a [`ScrollaxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollaxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
