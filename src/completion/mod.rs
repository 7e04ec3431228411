//! Completion Service Module
//!
//! Interface to the language model that rewrites sentences.

use crate::config::Config;
use crate::error::FixerResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

pub mod openai;

/// A single chat message sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for chat completion backends
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Run a completion. `Ok(None)` means the call succeeded but produced no text.
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> FixerResult<Option<String>>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Factory to create the configured completion service
pub fn create_service(config: &Config) -> FixerResult<Arc<dyn CompletionService>> {
    let client = openai::OpenAiClient::new(config)?;
    info!("✅ Completion service '{}' initialized", client.name());
    Ok(Arc::new(client))
}
