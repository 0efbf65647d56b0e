//! Borrowed character ranges over a caller-owned line buffer.

use std::ops::Range;

use crate::error::{Error, Result};

/// A validated view of `buffer[start..start + len]`.
///
/// `context_end` bounds the text a shaper may look at around the range
/// (`0..context_end`), so joining can take neighbouring chars into account
/// when the range is drawn as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterRange<'a> {
    buffer: &'a [char],
    start: usize,
    len: usize,
    context_end: usize,
}

impl<'a> CharacterRange<'a> {
    /// Create a range whose shaping context ends where the range ends.
    pub fn new(buffer: &'a [char], start: usize, len: usize) -> Result<Self> {
        let end = start.checked_add(len).ok_or(Error::InvalidRange {
            start,
            len,
            context_end: usize::MAX,
            buffer_len: buffer.len(),
        })?;
        Self::with_context_end(buffer, start, len, end)
    }

    /// Create a range with an explicit shaping context end.
    ///
    /// Requires `start + len <= context_end <= buffer.len()`.
    pub fn with_context_end(
        buffer: &'a [char],
        start: usize,
        len: usize,
        context_end: usize,
    ) -> Result<Self> {
        let invalid = || Error::InvalidRange {
            start,
            len,
            context_end,
            buffer_len: buffer.len(),
        };
        let end = start.checked_add(len).ok_or_else(invalid)?;
        if end > context_end || context_end > buffer.len() {
            return Err(invalid());
        }
        Ok(Self {
            buffer,
            start,
            len,
            context_end,
        })
    }

    /// The whole buffer.
    #[must_use]
    pub fn full(buffer: &'a [char]) -> Self {
        Self {
            buffer,
            start: 0,
            len: buffer.len(),
            context_end: buffer.len(),
        }
    }

    #[must_use]
    pub const fn buffer(&self) -> &'a [char] {
        self.buffer
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    pub const fn context_end(&self) -> usize {
        self.context_end
    }

    /// Buffer indices covered by the range.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The chars of the range.
    #[must_use]
    pub fn chars(&self) -> &'a [char] {
        &self.buffer[self.span()]
    }

    /// Copy of `offset..offset + len` (relative to the range start) as a
    /// string, for measurement or resolution.
    #[must_use]
    pub fn substring(&self, offset: usize, len: usize) -> String {
        let chars = self.chars();
        let from = offset.min(chars.len());
        let to = offset.saturating_add(len).min(chars.len());
        chars[from..to].iter().collect()
    }

    /// Copy of the whole range as a string.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.chars().iter().collect()
    }
}
