use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    CredentialMissing,
    CredentialInvalid,
    EmptyResponse,
    Service,
    InvalidState,
}

impl ErrorCode {
    /// Credential failures keep interpretation disabled until the reading is reset.
    pub fn is_credential_failure(self) -> bool {
        matches!(self, ErrorCode::CredentialMissing | ErrorCode::CredentialInvalid)
    }
}

/// User-visible error slot of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ErrorNotice {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorNotice {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
