//! Stable error codes for callers that forward errors across a process boundary.

/// Every error enum implements this to expose a structured code string.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROFILE_ERROR: &str = "PROFILE_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
