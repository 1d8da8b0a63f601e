use shared::error::{ErrorCode, ErrorNotice};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpretationError {
    #[error("API key is not configured; cannot fetch interpretation")]
    CredentialMissing,
    #[error("invalid API key; check the API_KEY configuration")]
    CredentialInvalid,
    #[error("received an empty response from the text-generation service")]
    EmptyResponse,
    #[error("failed to get interpretation: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl InterpretationError {
    pub fn service(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Service(cause.into())
    }
}

impl From<reqwest::Error> for InterpretationError {
    fn from(value: reqwest::Error) -> Self {
        Self::Service(Box::new(value))
    }
}

#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    InvalidState(String),
    #[error(transparent)]
    Interpretation(#[from] InterpretationError),
}

impl ReadingError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReadingError::Validation(_) => ErrorCode::Validation,
            ReadingError::InvalidState(_) => ErrorCode::InvalidState,
            ReadingError::Interpretation(err) => match err {
                InterpretationError::CredentialMissing => ErrorCode::CredentialMissing,
                InterpretationError::CredentialInvalid => ErrorCode::CredentialInvalid,
                InterpretationError::EmptyResponse => ErrorCode::EmptyResponse,
                InterpretationError::Service(_) => ErrorCode::Service,
            },
        }
    }

    /// Caller mistakes such as a blank question or a draw out of turn, as
    /// opposed to failures of the interpretation service.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ReadingError::Validation(_) | ReadingError::InvalidState(_))
    }

    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice::new(self.code(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpretation_errors_map_to_their_codes() {
        let cases = [
            (InterpretationError::CredentialMissing, ErrorCode::CredentialMissing),
            (InterpretationError::CredentialInvalid, ErrorCode::CredentialInvalid),
            (InterpretationError::EmptyResponse, ErrorCode::EmptyResponse),
            (InterpretationError::service("boom"), ErrorCode::Service),
        ];
        for (err, code) in cases {
            assert_eq!(ReadingError::from(err).code(), code);
        }
    }

    #[test]
    fn service_notice_carries_underlying_cause() {
        let notice = ReadingError::from(InterpretationError::service("status 503")).notice();
        assert_eq!(notice.code, ErrorCode::Service);
        assert_eq!(notice.message, "failed to get interpretation: status 503");
    }

    #[test]
    fn only_caller_mistakes_are_rejections() {
        assert!(ReadingError::Validation("blank".into()).is_rejection());
        assert!(ReadingError::invalid_state("not drawing").is_rejection());
        assert!(!ReadingError::from(InterpretationError::CredentialMissing).is_rejection());
        assert!(!ReadingError::from(InterpretationError::service("status 503")).is_rejection());
    }
}
