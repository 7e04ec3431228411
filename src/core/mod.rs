//! Core processing modules
//!
//! Contains the sentence scanner, prompt construction and the
//! rewrite orchestration logic.

pub mod orchestrator;
pub mod prompt;
pub mod sentence;

pub use orchestrator::{DeclensionFixer, Rewrite};
pub use prompt::RewriteRequest;
pub use sentence::{find_sentence_end, find_sentence_start, sentence_span, SentenceSpan};
