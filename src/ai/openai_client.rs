// External dependencies
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

// Internal dependencies
use crate::ai::error::TransportError;
use crate::config::defaults::DEFAULT_TEMPERATURE;
use crate::config::ModelTarget;

/// Text content of the model's first choice, if it sent any.
pub type RawReply = Option<String>;

// ============================================================================
// Chat Completion API Structures
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn into_first_content(self) -> RawReply {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

// ============================================================================
// Backend Seam
// ============================================================================

/// Sends one prompt to a chat model and hands back its raw reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn invoke(&self, prompt: &str, target: &ModelTarget) -> Result<RawReply, TransportError>;
}

// ============================================================================
// Client Implementation
// ============================================================================

/// HTTP client for OpenAI-compatible `chat/completions` endpoints.
///
/// One request per call, no retries. The underlying `reqwest::Client` is
/// reused across calls.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    temperature: f64,
}

impl OpenAiClient {
    /// Builds a client. `timeout` of `None` applies no client-side limit.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn completions_url(api_url: &str) -> Result<Url, TransportError> {
        let raw = format!("{}/chat/completions", api_url.trim_end_matches('/'));
        Url::parse(&raw).map_err(|source| TransportError::InvalidEndpoint {
            url: api_url.to_string(),
            source,
        })
    }

    pub fn build_request(&self, prompt: &str, target: &ModelTarget) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: target.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn invoke(&self, prompt: &str, target: &ModelTarget) -> Result<RawReply, TransportError> {
        let url = Self::completions_url(&target.api_url)?;
        let request = self.build_request(prompt, target);

        debug!(
            "Sending chat completion to {url} with model {}, prompt length: {}",
            target.model,
            prompt.len()
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", target.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Api { status, body });
        }

        let bytes = response.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        let content = parsed.into_first_content();

        match &content {
            Some(text) => info!("Model replied with {} characters", text.len()),
            None => info!("Model replied without content"),
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ModelTarget {
        ModelTarget {
            model: "custom-model".to_string(),
            api_url: "http://custom-url:8080/v1".to_string(),
            api_key: "secret".to_string(),
        }
    }

    #[test]
    fn completions_url_appends_path() {
        let url = OpenAiClient::completions_url("http://localhost:1234/v1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v1/chat/completions");

        let url = OpenAiClient::completions_url("http://localhost:1234/v1/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn completions_url_rejects_garbage() {
        let err = OpenAiClient::completions_url("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidEndpoint { .. }));
    }

    #[test]
    fn request_carries_model_prompt_and_low_temperature() {
        let client = OpenAiClient::new(None).unwrap();
        let request = client.build_request("sort me", &target());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "model": "custom-model",
                "messages": [{"role": "user", "content": "sort me"}],
                "temperature": 0.1,
            })
        );
    }

    #[test]
    fn response_yields_first_choice_content() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"[1, 2]"}},{"message":{"content":"[2, 1]"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_first_content(), Some("[1, 2]".to_string()));
    }

    #[test]
    fn null_content_and_missing_choices_are_absent() {
        let null_content: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(null_content.into_first_content(), None);

        let no_choices: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(no_choices.into_first_content(), None);

        let bare: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.into_first_content(), None);
    }
}
