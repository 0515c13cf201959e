//! Shared error type across sectxt crates.

use thiserror::Error;

/// Stable error codes (logs, tests, operator tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The policy configuration was rejected by the validator.
    InvalidConfig,
    /// Startup / wiring failure outside the policy itself.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SecTxtError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SecTxtError {
    /// A configuration key violated the policy schema.
    #[error("invalid policy config: {key}: {reason}")]
    Invalid { key: String, reason: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl SecTxtError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SecTxtError::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SecTxtError::Invalid { .. } => ErrorCode::InvalidConfig,
            SecTxtError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Offending config key, if the error came from validation.
    pub fn key(&self) -> Option<&str> {
        match self {
            SecTxtError::Invalid { key, .. } => Some(key),
            SecTxtError::Internal(_) => None,
        }
    }
}
