//! Rewrite Orchestration
//!
//! Runs one "fix declension" action: find the sentence under the cursor,
//! ask the model to re-inflect it for the selected word, and put the
//! result back into the document.

use super::prompt::RewriteRequest;
use super::sentence::{sentence_span, SentenceSpan};
use crate::completion::CompletionService;
use crate::editor::{Editor, Position};
use crate::error::{FixerError, FixerResult};
use crate::notify::Notifier;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Notice shown after a successful rewrite
pub const SUCCESS_NOTICE: &str = "Sentence updated";

/// A rewrite that was applied to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub line: usize,
    pub span: SentenceSpan,
    pub key_word: String,
    pub sentence: String,
    pub replacement: String,
}

/// Coordinates the editor, the completion service and user notices
pub struct DeclensionFixer {
    service: Arc<dyn CompletionService>,
    notifier: Arc<dyn Notifier>,
    model: String,
}

impl DeclensionFixer {
    pub fn new(
        service: Arc<dyn CompletionService>,
        notifier: Arc<dyn Notifier>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            service,
            notifier,
            model: model.into(),
        }
    }

    /// Run the command against `editor`.
    ///
    /// Failures are reported through the notifier and yield `None`; the
    /// document text is only touched when the model returned usable text.
    /// The exclusive borrow of `editor` keeps rewrites of one document
    /// from interleaving.
    pub async fn fix_declension<E>(&self, editor: &mut E) -> Option<Rewrite>
    where
        E: Editor + ?Sized,
    {
        match self.try_fix(editor).await {
            Ok(rewrite) => {
                info!(
                    "✅ Rewrote line {} [{}, {})",
                    rewrite.line, rewrite.span.start, rewrite.span.end
                );
                self.notifier.notify(SUCCESS_NOTICE);
                Some(rewrite)
            }
            Err(e) => {
                warn!("❌ Declension fix failed: {}", e);
                self.notifier.notify(&format!("Error: {e}"));
                None
            }
        }
    }

    async fn try_fix<E>(&self, editor: &mut E) -> FixerResult<Rewrite>
    where
        E: Editor + ?Sized,
    {
        let cursor = editor.cursor();
        let line_text = editor.line(cursor.line)?;
        let key_word = editor.selection();

        let span = sentence_span(&line_text, cursor.ch);
        let sentence = span.slice(&line_text).trim().to_string();
        debug!(
            "🔎 Sentence [{}, {}) at line {}: '{}' (key word '{}')",
            span.start, span.end, cursor.line, sentence, key_word
        );

        editor.set_selection(
            Position::new(cursor.line, span.start),
            Position::new(cursor.line, span.end),
        );

        let request = RewriteRequest::new(key_word, sentence);
        let completion = self
            .service
            .complete(&request.to_messages(), &self.model)
            .await?;

        let replacement = match completion {
            Some(text) if !text.is_empty() => text,
            _ => return Err(FixerError::EmptyCompletion),
        };

        editor.replace_selection(&replacement);

        Ok(Rewrite {
            line: cursor.line,
            span,
            key_word: request.key_word,
            sentence: request.sentence,
            replacement,
        })
    }
}
