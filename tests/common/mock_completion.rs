//! Mock Completion Service for Testing
//!
//! Returns a scripted reply and records every request.

#![allow(dead_code)]

use async_trait::async_trait;
use declension_fixer::completion::{ChatMessage, CompletionService};
use declension_fixer::error::{FixerError, FixerResult};
use std::sync::{Arc, Mutex};

/// Scripted outcome of a completion call
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Absent,
    Fail(String),
}

/// Mock completion service that records prompts
#[derive(Debug)]
pub struct MockCompletion {
    reply: Reply,
    /// (messages, model) of every call
    pub calls: Arc<Mutex<Vec<(Vec<ChatMessage>, String)>>>,
}

impl MockCompletion {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompt text of the first call
    pub fn first_prompt(&self) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .first()
            .and_then(|(messages, _)| messages.first().map(|m| m.content.clone()))
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, messages: &[ChatMessage], model: &str) -> FixerResult<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), model.to_string()));

        match &self.reply {
            Reply::Text(text) => Ok(Some(text.clone())),
            Reply::Absent => Ok(None),
            Reply::Fail(msg) => Err(FixerError::Service(msg.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls() {
        let mock = MockCompletion::replying("ok");
        let reply = tokio_test::block_on(mock.complete(&[ChatMessage::system("hi")], "m")).unwrap();
        assert_eq!(reply.as_deref(), Some("ok"));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.first_prompt().as_deref(), Some("hi"));
    }
}
