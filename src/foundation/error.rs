/// Convenience result type used across scroll-curves.
pub type ScrollResult<T> = Result<T, ScrollError>;

/// Top-level error taxonomy for the fallible surfaces of the crate.
///
/// Sampling and interpolation never fail; only configuration loading, validation and style
/// application can produce errors.
#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    /// Invalid user-provided scene configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving a scene configuration (unknown preset, bad binding spec).
    #[error("config error: {0}")]
    Config(String),

    /// Errors applying evaluated frames to a style sink.
    #[error("style error: {0}")]
    Style(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollError {
    /// Build a [`ScrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollError::Style`] value.
    pub fn style(msg: impl Into<String>) -> Self {
        Self::Style(msg.into())
    }

    /// Build a [`ScrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix a validation message with `ctx`; other variants pass through unchanged.
    pub fn in_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            Self::Validation(msg) => Self::Validation(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}

impl From<serde_json::Error> for ScrollError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
