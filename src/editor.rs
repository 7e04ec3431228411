//! Editor Integration
//!
//! The editing surface the rewrite command works against, plus a
//! file-backed document used by the command line host.

use crate::error::{FixerError, FixerResult};
use std::path::Path;
use tracing::debug;

/// A cursor location; `ch` counts characters from the start of the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Trait for the host editor holding the active document
pub trait Editor: Send {
    /// Current cursor (the head of the selection)
    fn cursor(&self) -> Position;

    /// Text of line `line`, without its line break
    fn line(&self, line: usize) -> FixerResult<String>;

    /// Currently selected text, empty when nothing is selected
    fn selection(&self) -> String;

    /// Select from `from` (anchor) to `to` (head)
    fn set_selection(&mut self, from: Position, to: Position);

    /// Replace the selected text, leaving the cursor after the insertion
    fn replace_selection(&mut self, text: &str);
}

/// In-memory text document with a single selection
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    text: String,
    anchor: usize,
    head: usize,
    crlf: bool,
    modified: bool,
}

impl TextDocument {
    /// Documents whose breaks are all CRLF are edited with LF and written
    /// back with CRLF. Mixed line endings are kept byte for byte, so their
    /// CRLF lines carry a trailing `\r`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let crlf_breaks = text.matches("\r\n").count();
        let crlf = crlf_breaks > 0 && crlf_breaks == text.matches('\n').count();
        Self {
            text: if crlf { text.replace("\r\n", "\n") } else { text },
            crlf,
            ..Self::default()
        }
    }

    /// Read a document from disk
    pub fn open(path: &Path) -> FixerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        debug!("📄 Opened {} ({} bytes)", path.display(), text.len());
        Ok(Self::new(text))
    }

    /// Write the document to disk, restoring CRLF line endings if it had them
    pub fn save(&self, path: &Path) -> FixerResult<()> {
        std::fs::write(path, self.contents())?;
        debug!("💾 Saved {}", path.display());
        Ok(())
    }

    /// Document text with its original line endings
    pub fn contents(&self) -> String {
        if self.crlf {
            self.text.replace('\n', "\r\n")
        } else {
            self.text.clone()
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Select from `from` to `to`, rejecting lines past the end of the document.
    /// Columns are still clamped to the line length.
    pub fn select(&mut self, from: Position, to: Position) -> FixerResult<()> {
        let count = self.line_count();
        for pos in [from, to] {
            if pos.line >= count {
                return Err(FixerError::Editor(format!(
                    "line {} is out of range (document has {} lines)",
                    pos.line, count
                )));
            }
        }
        self.set_selection(from, to);
        Ok(())
    }

    /// Flat character offset of a position, clamped into the document
    pub fn offset_of(&self, pos: Position) -> usize {
        let last = self.line_count() - 1;
        let target = pos.line.min(last);

        let mut offset = 0;
        for (i, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if i == target {
                return offset + pos.ch.min(len);
            }
            offset += len + 1;
        }
        offset
    }

    /// Position of a flat character offset
    pub fn position_of(&self, offset: usize) -> Position {
        let mut remaining = offset;
        let mut pos = Position::default();
        for (i, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            pos = Position::new(i, remaining.min(len));
            if remaining <= len {
                break;
            }
            remaining -= len + 1;
        }
        pos
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn selected_range(&self) -> (usize, usize) {
        (self.anchor.min(self.head), self.anchor.max(self.head))
    }
}

impl Editor for TextDocument {
    fn cursor(&self) -> Position {
        self.position_of(self.head)
    }

    fn line(&self, line: usize) -> FixerResult<String> {
        self.text
            .split('\n')
            .nth(line)
            .map(str::to_string)
            .ok_or_else(|| FixerError::Editor(format!("line {} is out of range", line)))
    }

    fn selection(&self) -> String {
        let (start, end) = self.selected_range();
        self.text.chars().skip(start).take(end - start).collect()
    }

    fn set_selection(&mut self, from: Position, to: Position) {
        self.anchor = self.offset_of(from);
        self.head = self.offset_of(to);
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.selected_range();
        let range = self.byte_index(start)..self.byte_index(end);
        self.text.replace_range(range, text);

        let caret = start + text.chars().count();
        self.anchor = caret;
        self.head = caret;
        self.modified = true;
    }
}
