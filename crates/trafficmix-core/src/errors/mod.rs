pub mod config_error;
pub mod error_code;
pub mod profile_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use profile_error::ProfileError;

/// Umbrella error for the fallible edges of the workspace.
#[derive(Debug, thiserror::Error)]
pub enum MixError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for MixError {
    fn error_code(&self) -> &'static str {
        match self {
            MixError::Config(e) => e.error_code(),
            MixError::Profile(e) => e.error_code(),
            MixError::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type MixResult<T> = Result<T, MixError>;
