//! Applications profile errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while parsing an applications profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("malformed profile line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("duplicate application {id} on line {line}")]
    DuplicateItem { id: String, line: usize },
}

impl ErrorCode for ProfileError {
    fn error_code(&self) -> &'static str {
        error_code::PROFILE_ERROR
    }
}
