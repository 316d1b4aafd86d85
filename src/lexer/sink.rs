//! Destination for styled spans
//!
//! The host editor owns the styling cursor; the lexer only tells it how far to
//! advance and with which style.

use crate::style::{Span, StyleId};

/// Receives spans in document order
#[cfg_attr(test, mockall::automock)]
pub trait StyleSink {
    /// Style the next `len` bytes after the cursor and advance past them
    fn set_styling(&mut self, len: usize, style: StyleId);
}

impl StyleSink for Vec<Span> {
    fn set_styling(&mut self, len: usize, style: StyleId) {
        self.push(Span::new(len, style));
    }
}

/// Sink that tracks the absolute cursor while forwarding spans
pub struct CursorSink<'a, S: StyleSink + ?Sized> {
    inner: &'a mut S,
    cursor: usize,
}

impl<'a, S: StyleSink + ?Sized> CursorSink<'a, S> {
    /// Start forwarding at byte `start` of the document
    pub fn new(inner: &'a mut S, start: usize) -> Self {
        Self {
            inner,
            cursor: start,
        }
    }

    /// Byte offset just past the last forwarded span
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a, S: StyleSink + ?Sized> StyleSink for CursorSink<'a, S> {
    fn set_styling(&mut self, len: usize, style: StyleId) {
        self.cursor += len;
        self.inner.set_styling(len, style);
    }
}
