//! Mock Editor for Testing
//!
//! Explicit cursor and selection text, with every mutation recorded.

#![allow(dead_code)]

use declension_fixer::editor::{Editor, Position};
use declension_fixer::error::{FixerError, FixerResult};

#[derive(Debug, Default)]
pub struct MockEditor {
    pub lines: Vec<String>,
    pub cursor: Position,
    pub selected: String,
    /// Last range passed to `set_selection`
    pub selection_range: Option<(Position, Position)>,
    /// Every text passed to `replace_selection`
    pub replaced: Vec<String>,
}

impl MockEditor {
    pub fn new(line: &str, cursor_ch: usize, selected: &str) -> Self {
        Self {
            lines: vec![line.to_string()],
            cursor: Position::new(0, cursor_ch),
            selected: selected.to_string(),
            ..Self::default()
        }
    }
}

impl Editor for MockEditor {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn line(&self, line: usize) -> FixerResult<String> {
        self.lines
            .get(line)
            .cloned()
            .ok_or_else(|| FixerError::Editor(format!("line {line} is out of range")))
    }

    fn selection(&self) -> String {
        self.selected.clone()
    }

    fn set_selection(&mut self, from: Position, to: Position) {
        self.selection_range = Some((from, to));
        self.cursor = to;
    }

    fn replace_selection(&mut self, text: &str) {
        self.replaced.push(text.to_string());
        if let Some((from, to)) = self.selection_range {
            let line: Vec<char> = self.lines[from.line].chars().collect();
            let mut updated: String = line[..from.ch].iter().collect();
            updated.push_str(text);
            updated.extend(line[to.ch..].iter());
            self.lines[from.line] = updated;
        }
    }
}
