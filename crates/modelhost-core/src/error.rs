//! Error types for modelhost

/// Result type alias using modelhost's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for inference handler operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request declared a content type other than `application/json`
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Model artifact loading errors
    #[error("model error: {0}")]
    Model(String),

    /// Errors raised by a predictor's predict operation
    #[error("prediction error: {0}")]
    Prediction(String),

    /// Filesystem/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new unsupported-media-type error
    pub fn unsupported_media_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedMediaType(content_type.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new prediction error
    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::Prediction(msg.into())
    }
}
