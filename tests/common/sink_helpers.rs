//! Style sinks that record absolute document offsets

use pywright_lexer::{StyleId, StyleSink};

/// A styled run at an absolute byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun {
    pub start: usize,
    pub len: usize,
    pub style: StyleId,
}

/// Sink emulating an editor that owns the styling cursor
#[derive(Debug)]
pub struct RecordingSink {
    cursor: usize,
    pub runs: Vec<StyledRun>,
}

impl RecordingSink {
    /// Start styling at `start`, like `startStyling(start)` in an editor
    pub fn starting_at(start: usize) -> Self {
        Self {
            cursor: start,
            runs: Vec::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Style of the byte at `offset`, if it was styled
    pub fn style_at(&self, offset: usize) -> Option<StyleId> {
        self.runs
            .iter()
            .find(|r| r.start <= offset && offset < r.start + r.len)
            .map(|r| r.style)
    }
}

impl StyleSink for RecordingSink {
    fn set_styling(&mut self, len: usize, style: StyleId) {
        self.runs.push(StyledRun {
            start: self.cursor,
            len,
            style,
        });
        self.cursor += len;
    }
}
