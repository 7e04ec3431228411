//! Rewrite Prompt
//!
//! Builds the chat messages that ask the model to re-inflect a sentence.

use crate::completion::ChatMessage;

/// One "fix declension" request: the word to agree with and the sentence to rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    pub key_word: String,
    pub sentence: String,
}

impl RewriteRequest {
    pub fn new(key_word: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            key_word: key_word.into(),
            sentence: sentence.into(),
        }
    }

    /// Messages to send to the completion service
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        vec![ChatMessage::system(self.system_prompt())]
    }

    fn system_prompt(&self) -> String {
        let sentence = &self.sentence;
        let key_word = &self.key_word;

        format!(
            r#"
Your task is to adjust the declension of the entire sentence to match the grammatical declension of the provided word. Ensure that you do not change the words in the sentence, its meaning, or essence. Only alter the inflection of the sentence to match the given word’s declension.
Here is the sentence:
"""
{sentence}
"""

The given word whose declension needs to be matched:
"""
{key_word}
"""

Please adjust the sentence accordingly.
"#
        )
        .trim()
        .to_string()
    }
}
