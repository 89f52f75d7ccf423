use crate::error::ContentError;
use configuration::AiSettings;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// The JSON payload for the messages endpoint.
#[derive(Debug, Serialize)]
struct MessagesPayload<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// A client for the text-generation API.
pub struct PromptClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl PromptClient {
    /// Creates a new `PromptClient`.
    ///
    /// Returns `None` when no API key is configured, allowing the system to
    /// gracefully fall back to template-based content.
    pub fn new(settings: &AiSettings) -> Option<Self> {
        if settings.api_key.is_empty() {
            info!("Text-generation API key not set, using template fallback");
            return None;
        }
        Some(Self {
            client: Client::new(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    /// Sends a prompt and returns the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ContentError> {
        let payload = MessagesPayload {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to decode error response".to_string());
            return Err(ContentError::ApiError(error_text));
        }

        let body: serde_json::Value = response.json().await?;
        body.pointer("/content/0/text")
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ContentError::EmptyResponse)
    }
}
