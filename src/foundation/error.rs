/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by sequencer and preset APIs.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid preset parameters (empty text lists, zero durations, bad ranges).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration that cannot be interpreted, such as a non-numeric counter target.
    #[error("config error: {0}")]
    Config(String),

    /// Misuse of a timeline or sequence (for example exceeding a tick budget).
    #[error("sequence error: {0}")]
    Sequence(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Sequence`] value.
    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
