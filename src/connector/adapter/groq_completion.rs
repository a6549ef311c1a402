use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::CompletionService;
use crate::domain::{Credential, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Subset of the chat completions response we read.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned with non-success statuses:
/// `{"error": {"message": "...", "type": "..."}}`.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// [`CompletionService`] backed by Groq's OpenAI-compatible chat completions API.
///
/// The credential arrives with each call rather than at construction, so one
/// instance serves every session and no key is held between requests.
///
/// Requests use reqwest's default client settings: no timeout override, no
/// retries. The call waits until the service answers or the transport fails.
pub struct GroqCompletion {
    client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqCompletion {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            model: model.into(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull a readable message out of an error body, falling back to the raw text.
    fn error_detail(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => body.trim().to_string(),
        }
    }
}

impl Default for GroqCompletion {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CompletionService for GroqCompletion {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, credential: &Credential, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("GroqCompletion: POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::service(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqCompletion: API returned {status}");
            let detail = Self::error_detail(&body);
            return Err(DomainError::service(if detail.is_empty() {
                format!("API returned {status}")
            } else {
                format!("API returned {status}: {detail}")
            }));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::service(format!("failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::service("response contained no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| DomainError::service("response contained no message content"))
    }
}
