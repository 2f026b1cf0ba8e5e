//! Error types for rewrite-core

/// Result type for rewrite-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rewrite-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Similarity threshold {value} is outside the range (0, 1]")]
    InvalidThreshold { value: f32 },

    #[error("Invalid rewrite configuration: {message}")]
    Config { message: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
