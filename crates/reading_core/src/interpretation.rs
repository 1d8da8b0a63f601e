use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::DrawnCard,
    protocol::{GenerateContentRequest, GenerateContentResponse, ServiceErrorEnvelope},
};
use tracing::{info, warn};

use crate::{error::InterpretationError, prompt::compose_prompt};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct InterpretationConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for InterpretationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for InterpretationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpretationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl InterpretationConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Turns a full spread and a question into narrative text.
#[async_trait]
pub trait Interpreter: Send + Sync {
    fn has_credential(&self) -> bool;
    async fn interpret(
        &self,
        spread: &[DrawnCard],
        question: &str,
    ) -> Result<String, InterpretationError>;
}

pub struct InterpretationClient {
    http: Client,
    config: InterpretationConfig,
}

impl InterpretationClient {
    pub fn new(config: InterpretationConfig) -> Result<Self, InterpretationError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl Interpreter for InterpretationClient {
    fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    async fn interpret(
        &self,
        spread: &[DrawnCard],
        question: &str,
    ) -> Result<String, InterpretationError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(InterpretationError::CredentialMissing),
        };

        let prompt = compose_prompt(spread, question);
        info!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "interpretation: request sent"
        );
        let response = self
            .http
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_failure(status, &body);
            warn!(status = status.as_u16(), error = %err, "interpretation: request failed");
            return Err(err);
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.text().ok_or(InterpretationError::EmptyResponse)?;
        info!(
            model = %self.config.model,
            text_len = text.len(),
            "interpretation: response received"
        );
        Ok(text)
    }
}

fn classify_failure(status: StatusCode, body: &str) -> InterpretationError {
    let envelope = serde_json::from_str::<ServiceErrorEnvelope>(body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.clone())
        .unwrap_or_else(|| body.trim().to_string());
    let google_status = envelope.as_ref().and_then(|e| e.error.status.as_deref());

    let credential_status = matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    );
    let credential_rejected = message.contains("API key not valid")
        || matches!(google_status, Some("UNAUTHENTICATED" | "PERMISSION_DENIED"));

    if credential_status && credential_rejected {
        return InterpretationError::CredentialInvalid;
    }
    if message.is_empty() {
        InterpretationError::service(format!("service returned status {status}"))
    } else {
        InterpretationError::service(format!("service returned status {status}: {message}"))
    }
}

/// Splits response text into display paragraphs.
///
/// Models sometimes echo the escaped two-character `\n` instead of a real
/// newline, so both are treated as breaks.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| line.split("\\n"))
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "tests/interpretation_tests.rs"]
mod tests;
