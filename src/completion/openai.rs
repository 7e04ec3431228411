//! OpenAI-compatible Chat Completions
//!
//! Talks to any endpoint implementing `POST {base_url}/chat/completions`.

use super::{ChatMessage, CompletionService};
use crate::config::Config;
use crate::error::{FixerError, FixerResult};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

const COMPLETIONS_PATH: &str = "chat/completions";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Token accounting reported by the API. Servers may omit any field.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Chat completions client bound to one endpoint and key
#[derive(Clone)]
pub struct OpenAiClient {
    endpoint: Url,
    api_key: String,
    http: reqwest::Client,
}

impl OpenAiClient {
    /// Build a client from settings. Later settings changes need a new client.
    pub fn new(config: &Config) -> FixerResult<Self> {
        let endpoint = completions_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        debug!("🔌 Completions endpoint: {}", endpoint);

        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
            http,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Join the completions path onto a base URL, keeping any path prefix like `/v1`
fn completions_url(base_url: &str) -> FixerResult<Url> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let base = Url::parse(&with_slash)
        .map_err(|e| FixerError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
    base.join(COMPLETIONS_PATH)
        .map_err(|e| FixerError::Config(format!("Invalid base URL '{}': {}", base_url, e)))
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> FixerResult<Option<String>> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&ChatRequest { model, messages })
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ Completion API error ({}): {}", status, body_text);
            return Err(FixerError::Service(format!("{status}: {body_text}")));
        }

        debug!("🧠 Completion raw body: {}", body_text);

        let parsed: ChatResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!("❌ Failed to deserialize completion response: {}", e);
            FixerError::Service(format!("malformed response: {e}"))
        })?;

        if let Some(usage) = parsed.usage {
            info!(
                "🪙 Tokens used: {} prompt + {} completion = {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_keeps_prefix() {
        let url = completions_url("https://api.openai.com/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.openai.com/v1/chat/completions");

        let url = completions_url("http://localhost:1234/v1/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_client_uses_default_endpoint() {
        let client = OpenAiClient::new(&Config::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = completions_url("not a url").unwrap_err();
        assert!(matches!(err, FixerError::Config(_)));
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::system("hi")];
        let body = serde_json::to_value(ChatRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
        })
        .unwrap();
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "hi");
    }

    #[test]
    fn test_response_with_null_content() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(parsed.choices[0].message.content.is_none());
        assert!(parsed.usage.is_none());
    }

    #[test]
    fn test_partial_usage_is_accepted() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"ok"}}],"usage":{"prompt_tokens":10,"total_tokens":10}}"#,
        )
        .unwrap();
        let usage = parsed.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 0);
    }
}
