use std::path::PathBuf;

/// Everything that can stop a generator run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The filter parameters fall outside the range the generator was validated for.
    #[error("invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }
}

/// Result alias for the library half of the crate.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
