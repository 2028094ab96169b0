//! Error types for HealthGauge

/// Result type alias using HealthGauge's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for HealthGauge operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A model artifact failed to load or is not available
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Request input failed validation
    #[error("validation error: {0}")]
    Validation(String),

    /// Inference failed after validation passed
    #[error("prediction error: {0}")]
    Prediction(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new model-unavailable error
    pub fn model_unavailable(msg: impl Into<String>) -> Self {
        Self::ModelUnavailable(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new prediction error
    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::Prediction(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
