//! A glyph renderer that records draw calls instead of painting.

use std::ops::Range;

use bidi_line::GlyphRenderer;

/// One captured `draw_run` call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    /// The chars that would be shaped, in logical order.
    pub text: String,
    pub offset: usize,
    pub len: usize,
    pub context: Range<usize>,
    pub x: f32,
    pub y: f32,
    pub is_rtl: bool,
}

/// Captures every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of the drawn runs, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.text.as_str()).collect()
    }
}

impl GlyphRenderer for RecordingRenderer {
    fn draw_run(
        &mut self,
        text: &[char],
        offset: usize,
        len: usize,
        context: Range<usize>,
        x: f32,
        y: f32,
        is_rtl: bool,
    ) {
        self.calls.push(DrawCall {
            text: text[offset..offset + len].iter().collect(),
            offset,
            len,
            context,
            x,
            y,
            is_rtl,
        });
    }
}
