//! Sentence Boundary Scanning
//!
//! Finds the sentence enclosing a cursor inside a single line of text.
//! Offsets are gaps between characters and are counted in `char`s, so
//! `line.chars().count()` is the position after the last character.

/// Characters that end a sentence
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Check whether a character ends a sentence
pub fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// Half-open `[start, end)` range of one sentence within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Characters of `line` covered by this span
    pub fn slice(&self, line: &str) -> String {
        line.chars().skip(self.start).take(self.len()).collect()
    }
}

/// Compute the sentence span around `index`
pub fn sentence_span(line: &str, index: usize) -> SentenceSpan {
    SentenceSpan {
        start: find_sentence_start(line, index),
        end: find_sentence_end(line, index),
    }
}

/// Scan backward from `index` for the start of the enclosing sentence.
///
/// Returns one past the nearest terminator at or before `index`. A
/// terminator sitting exactly at `index` counts as the end of the
/// previous sentence, so the result can be `index + 1`. Reaching position
/// zero always yields zero, even when `line[0]` is a terminator.
pub fn find_sentence_start(line: &str, index: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let index = index.min(chars.len());

    for i in (0..=index).rev() {
        if i == 0 {
            return 0;
        }
        if chars.get(i).copied().is_some_and(is_terminator) {
            return i + 1;
        }
    }
    0
}

/// Scan forward from `index` for the end of the enclosing sentence.
///
/// Returns one past the nearest terminator at or after `index`, or the
/// line length when the scan runs off the end of the line.
pub fn find_sentence_end(line: &str, index: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    for (i, &c) in chars.iter().enumerate().skip(index) {
        if i == len - 1 {
            return len;
        }
        if is_terminator(c) {
            return i + 1;
        }
    }
    len
}
